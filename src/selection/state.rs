use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::record::{Identify, Page};
use crate::types::errors::SelectionError;
use crate::types::identifiers::{RecordId, SelectionVersion};

/// Which id set decides selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Explicit,
    AllExceptExcluded,
}

/// The active id set. The mode owns its set, so there is no inactive set to
/// leak into queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ActiveSet {
    Explicit { included: BTreeSet<RecordId> },
    AllExceptExcluded { excluded: BTreeSet<RecordId> },
}

impl Default for ActiveSet {
    fn default() -> Self {
        ActiveSet::Explicit {
            included: BTreeSet::new(),
        }
    }
}

/// Sparse selection over a listing that is never fully loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(flatten)]
    active: ActiveSet,
    total_count: u64,
}

impl SelectionState {
    pub fn mode(&self) -> SelectionMode {
        match self.active {
            ActiveSet::Explicit { .. } => SelectionMode::Explicit,
            ActiveSet::AllExceptExcluded { .. } => SelectionMode::AllExceptExcluded,
        }
    }

    pub fn active_ids(&self) -> &ActiveSet {
        &self.active
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        match &self.active {
            ActiveSet::Explicit { included } => included.contains(&id),
            ActiveSet::AllExceptExcluded { excluded } => !excluded.contains(&id),
        }
    }

    /// Selected records across the whole listing. In `AllExceptExcluded` this
    /// trusts the last known total and saturates at zero.
    pub fn selected_count(&self) -> u64 {
        match &self.active {
            ActiveSet::Explicit { included } => included.len() as u64,
            ActiveSet::AllExceptExcluded { excluded } => {
                self.total_count.saturating_sub(excluded.len() as u64)
            }
        }
    }

    /// Validate a bulk count against the known total without mutating anything.
    pub fn check_count(&self, n: i64) -> Result<u64, SelectionError> {
        if n <= 0 {
            return Err(SelectionError::InvalidCount(n.to_string()));
        }
        let requested = n as u64;
        if requested > self.total_count {
            return Err(SelectionError::OutOfRange {
                requested,
                total: self.total_count,
            });
        }
        Ok(requested)
    }

    /// Fingerprint of the canonical JSON form. Equal states hash equal.
    pub fn version(&self) -> SelectionVersion {
        // BTreeSet keeps ids sorted, so the encoding is canonical.
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        SelectionVersion::from_canonical(&bytes)
    }
}

/// Single writer for a [`SelectionState`].
///
/// Every mutation goes through `set_total_count`, `apply_page_delta`,
/// `bulk_select_first_n` (and its multi-page form) or `select_all`.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    state: SelectionState,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn set_total_count(&mut self, total: u64) {
        self.state.total_count = total;
    }

    /// Record the selection status of every id in `page_ids`.
    ///
    /// Ids outside `page_ids` are left alone, which is what keeps selections
    /// made on other pages intact.
    pub fn apply_page_delta(
        &mut self,
        page_ids: &BTreeSet<RecordId>,
        newly_selected: &BTreeSet<RecordId>,
    ) {
        match &mut self.state.active {
            ActiveSet::Explicit { included } => {
                for id in page_ids {
                    if newly_selected.contains(id) {
                        included.insert(*id);
                    } else {
                        included.remove(id);
                    }
                }
            }
            ActiveSet::AllExceptExcluded { excluded } => {
                for id in page_ids {
                    if newly_selected.contains(id) {
                        excluded.remove(id);
                    } else {
                        excluded.insert(*id);
                    }
                }
            }
        }
    }

    /// Select exactly the records of `page` ranked `<= n`.
    ///
    /// Only the given page is consulted: ranks below `n` that live on other
    /// pages are not selected. The returned outcome reports how many of them
    /// were missed.
    pub fn bulk_select_first_n<R: Identify>(
        &mut self,
        n: i64,
        page: &Page<R>,
    ) -> Result<BulkOutcome, SelectionError> {
        self.bulk_select_first_n_across(n, std::iter::once(page))
    }

    /// Multi-page form of [`bulk_select_first_n`](Self::bulk_select_first_n):
    /// every id on any of `pages` ranked `<= n` is selected.
    pub fn bulk_select_first_n_across<'a, R, I>(
        &mut self,
        n: i64,
        pages: I,
    ) -> Result<BulkOutcome, SelectionError>
    where
        R: Identify + 'a,
        I: IntoIterator<Item = &'a Page<R>>,
    {
        let requested = self.state.check_count(n)?;

        let mut included = BTreeSet::new();
        let mut covered_ranks = 0u64;
        for (rank, record) in pages.into_iter().flat_map(|page| page.ranked()) {
            if rank <= requested {
                covered_ranks += 1;
                included.insert(record.id());
            }
        }

        let outcome = BulkOutcome {
            requested,
            selected: included.len() as u64,
            unreached: requested.saturating_sub(covered_ranks),
        };

        if self.state.mode() != SelectionMode::Explicit {
            info!("bulk selection leaves all-except-excluded mode");
        }
        self.state.active = ActiveSet::Explicit { included };
        debug!(
            requested = outcome.requested,
            selected = outcome.selected,
            unreached = outcome.unreached,
            "applied bulk selection"
        );

        Ok(outcome)
    }

    /// Select every record in the listing.
    pub fn select_all(&mut self) {
        info!(total = self.state.total_count, "switching to all-except-excluded mode");
        self.state.active = ActiveSet::AllExceptExcluded {
            excluded: BTreeSet::new(),
        };
    }
}

/// Result of a successful count-based selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub requested: u64,
    pub selected: u64,
    /// Ranks `<= requested` that were not on any consulted page.
    pub unreached: u64,
}

impl BulkOutcome {
    pub fn is_complete(&self) -> bool {
        self.unreached == 0
    }
}
