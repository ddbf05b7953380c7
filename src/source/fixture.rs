// Replays recorded listing responses from disk.
// read only
// one file per page: page-{n}.json

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::record::Record;
use crate::types::errors::TransportError;
use crate::types::identifiers::PageNumber;

use super::listing::decode_listing_reader;
use super::{FetchedPage, PageSource};

#[derive(Debug, Clone)]
pub struct FixtureSource {
    pub root: PathBuf,
}

impl FixtureSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn page_path(&self, page: PageNumber) -> PathBuf {
        self.root.join(format!("page-{page}.json"))
    }
}

impl PageSource<Record> for FixtureSource {
    fn fetch_page(
        &self,
        page: PageNumber,
        page_size: usize,
    ) -> Result<FetchedPage<Record>, TransportError> {
        let path = self.page_path(page);
        let f = File::open(&path)?;
        let fetched = decode_listing_reader(BufReader::new(f))?;

        // Oversized pages would overlap the ranks of the next page.
        if fetched.records.len() > page_size {
            return Err(TransportError::Unavailable(format!(
                "{} holds {} records, more than the page size {}",
                path.display(),
                fetched.records.len(),
                page_size,
            )));
        }
        Ok(fetched)
    }
}
