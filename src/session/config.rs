use crate::selection::BulkScope;
use crate::types::errors::ConfigError;

pub const DEFAULT_PAGE_SIZE: usize = 12;

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub bulk_scope: BulkScope,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl SessionConfig {
    pub fn v0() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            bulk_scope: BulkScope::CurrentPage,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::v0()
    }
}
