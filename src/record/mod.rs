pub mod fields;
pub mod page;
pub mod record;

pub use crate::types::identifiers::{PageNumber, RecordId};
pub use fields::{FieldValue, Fields};
pub use page::Page;
pub use record::{Identify, Record};
