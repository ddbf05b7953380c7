use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::types::errors::TransportError;

use super::FetchedPage;

/// Body of one listing response:
/// `{ "data": [...], "pagination": { "total", "limit", "current_page", "total_pages" } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub data: Vec<Record>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl From<ListingResponse> for FetchedPage<Record> {
    fn from(response: ListingResponse) -> Self {
        FetchedPage {
            records: response.data,
            total_count: response.pagination.total,
        }
    }
}

pub fn decode_listing(bytes: &[u8]) -> Result<FetchedPage<Record>, TransportError> {
    let response: ListingResponse = serde_json::from_slice(bytes)?;
    Ok(response.into())
}

pub fn decode_listing_reader<Rd: std::io::Read>(
    reader: Rd,
) -> Result<FetchedPage<Record>, TransportError> {
    let response: ListingResponse = serde_json::from_reader(reader)?;
    Ok(response.into())
}
