pub mod errors;
pub mod identifiers;

pub use errors::{ConfigError, SelectionError, SessionError, TransportError};
pub use identifiers::{Generation, PageNumber, PageNumberError, RecordId, SelectionVersion};
