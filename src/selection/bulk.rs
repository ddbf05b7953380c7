use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::record::{Identify, Page};
use crate::types::errors::SelectionError;

use super::state::{BulkOutcome, SelectionStore};

/// How far a count-based selection reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkScope {
    /// Only the loaded page is consulted. Ranks `<= n` on other pages are
    /// left unselected and reported as `unreached`.
    #[default]
    CurrentPage,
    /// Pages `1..=ceil(n / page_size)` are enumerated through the data source.
    AcrossPages,
}

/// Parse the free-text count typed into the bulk selection field.
///
/// Positive integers too large for `i64` saturate to `i64::MAX`, so they are
/// still rejected by the range check rather than as unparseable.
pub fn parse_count(input: &str) -> Result<i64, SelectionError> {
    let trimmed = input.trim();
    let n: i64 = match trimmed.parse::<i64>() {
        Ok(n) => n,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => return Err(SelectionError::InvalidCount(trimmed.to_string())),
    };
    if n <= 0 {
        return Err(SelectionError::InvalidCount(trimmed.to_string()));
    }
    Ok(n)
}

/// Turns "select the first N records" into a store mutation.
#[derive(Debug, Default)]
pub struct BulkSelector {
    input: String,
}

impl BulkSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Validate the pending input and apply it against `page`.
    ///
    /// The input is cleared only on success so a rejected value stays
    /// visible next to its error message.
    pub fn apply<R: Identify>(
        &mut self,
        store: &mut SelectionStore,
        page: &Page<R>,
    ) -> Result<BulkOutcome, SelectionError> {
        let n = parse_count(&self.input)?;
        let outcome = store.bulk_select_first_n(n, page)?;
        report_unreached(&outcome);
        self.input.clear();
        Ok(outcome)
    }

    /// Same as [`apply`](Self::apply) over several already fetched pages.
    pub fn apply_across<'a, R, I>(
        &mut self,
        store: &mut SelectionStore,
        pages: I,
    ) -> Result<BulkOutcome, SelectionError>
    where
        R: Identify + 'a,
        I: IntoIterator<Item = &'a Page<R>>,
    {
        let n = parse_count(&self.input)?;
        let outcome = store.bulk_select_first_n_across(n, pages)?;
        report_unreached(&outcome);
        self.input.clear();
        Ok(outcome)
    }
}

fn report_unreached(outcome: &BulkOutcome) {
    if !outcome.is_complete() {
        warn!(
            requested = outcome.requested,
            selected = outcome.selected,
            unreached = outcome.unreached,
            "bulk selection did not reach every requested rank"
        );
    }
}
