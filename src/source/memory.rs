use crate::types::errors::TransportError;
use crate::types::identifiers::PageNumber;

use super::{FetchedPage, PageSource};

/// A listing held entirely in memory, sliced into pages on request.
#[derive(Debug, Clone, Default)]
pub struct MemorySource<R> {
    records: Vec<R>,
}

impl<R> MemorySource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Clone> PageSource<R> for MemorySource<R> {
    fn fetch_page(
        &self,
        page: PageNumber,
        page_size: usize,
    ) -> Result<FetchedPage<R>, TransportError> {
        let total = self.records.len();
        // Past-the-end pages are empty, not an error.
        let start = usize::try_from(page.offset(page_size))
            .unwrap_or(usize::MAX)
            .min(total);
        let end = start.saturating_add(page_size).min(total);

        Ok(FetchedPage {
            records: self.records[start..end].to_vec(),
            total_count: total as u64,
        })
    }
}
