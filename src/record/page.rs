use crate::types::identifiers::{PageNumber, RecordId};

use super::record::Identify;

/// The batch of records currently loaded for one page number.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub number: PageNumber,
    pub page_size: usize,
    pub records: Vec<R>,
}

impl<R> Page<R> {
    pub fn new(number: PageNumber, page_size: usize, records: Vec<R>) -> Self {
        Self {
            number,
            page_size,
            records,
        }
    }

    /// 1-based position of the record at `index` across the whole listing.
    pub fn global_rank(&self, index: usize) -> u64 {
        self.number.offset(self.page_size) + index as u64 + 1
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Identify> Page<R> {
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(Identify::id)
    }

    /// Records paired with their global rank, in page order.
    pub fn ranked(&self) -> impl Iterator<Item = (u64, &R)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(move |(idx, record)| (self.global_rank(idx), record))
    }
}
