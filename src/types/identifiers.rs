use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Stable unique identifier carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub const fn new(raw: i64) -> Self {
        RecordId(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        RecordId(raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageNumberError {
    #[error("Page numbers are 1-based, got 0")]
    Zero,
}

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroU64);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU64::MIN);

    pub fn new(raw: u64) -> Result<Self, PageNumberError> {
        NonZeroU64::new(raw).map(PageNumber).ok_or(PageNumberError::Zero)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Number of records that precede this page for the given page size.
    pub fn offset(self, page_size: usize) -> u64 {
        (self.get() - 1).saturating_mul(page_size as u64)
    }

    pub fn next(self) -> Self {
        PageNumber(self.0.saturating_add(1))
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic tag attached to every page request.
/// Only the response carrying the latest generation may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn bump(&mut self) -> Generation {
        self.0 += 1;
        *self
    }
}

/// Content hash of a canonical selection state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionVersion(String);

impl SelectionVersion {
    pub fn from_canonical(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SelectionVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
