//! Pagination-aware selection engine for lazily loaded record tables.
//!
//! `paged-selection` keeps a sparse selection over a remote listing that is
//! only ever seen one page at a time. It decides which rows of the loaded
//! page render as selected, folds checkbox changes back into the selection
//! without disturbing other pages, and turns "select the first N records"
//! into a concrete id set. Fetching, rendering and widgets stay outside; the
//! engine consumes a page of records and answers which of them are selected.

pub mod record;
pub mod selection;
pub mod session;
pub mod source;
pub mod types;
