pub mod config;
pub mod driver;

pub use config::{SessionConfig, DEFAULT_PAGE_SIZE};
pub use driver::{LoadedPage, PageOutcome, PageRequest, Session};
