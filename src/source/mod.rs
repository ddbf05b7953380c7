pub mod fixture;
pub mod listing;
pub mod memory;

use crate::types::errors::TransportError;
use crate::types::identifiers::PageNumber;

pub use fixture::FixtureSource;
pub use listing::{decode_listing, decode_listing_reader, ListingResponse, Pagination};
pub use memory::MemorySource;

/// What a data source hands back for one page request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage<R> {
    pub records: Vec<R>,
    /// Size of the whole remote listing as of this response.
    pub total_count: u64,
}

/// Remote listing the engine pages through.
///
/// Transport and decoding live behind this trait; the engine only sees a
/// page of records and a total.
pub trait PageSource<R> {
    fn fetch_page(
        &self,
        page: PageNumber,
        page_size: usize,
    ) -> Result<FetchedPage<R>, TransportError>;
}

impl<R, S: PageSource<R> + ?Sized> PageSource<R> for &S {
    fn fetch_page(
        &self,
        page: PageNumber,
        page_size: usize,
    ) -> Result<FetchedPage<R>, TransportError> {
        (**self).fetch_page(page, page_size)
    }
}
