use thiserror::Error;

/// Rejected bulk selection requests. Raised before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid count: {0:?}")]
    InvalidCount(String),

    #[error("Requested {requested} records but only {total} are available")]
    OutOfRange { requested: u64, total: u64 },
}

impl SelectionError {
    /// Message shown next to the bulk-selection input.
    pub fn user_message(&self) -> String {
        match self {
            SelectionError::InvalidCount(_) => {
                "Please enter a valid number greater than 0".to_string()
            }
            SelectionError::OutOfRange { total, .. } => format!("Only {total} records available"),
        }
    }
}

/// Page fetch failures reported by a data source.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed listing response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Page size must be greater than 0")]
    InvalidPageSize,
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures of session operations that may both validate input and fetch pages.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
