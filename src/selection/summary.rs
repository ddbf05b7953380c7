use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{SelectionMode, SelectionState};

/// Selection count shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub mode: SelectionMode,
    pub count: u64,
}

impl SelectionSummary {
    pub fn of(state: &SelectionState) -> Self {
        Self {
            mode: state.mode(),
            count: state.selected_count(),
        }
    }
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            SelectionMode::Explicit if self.count == 0 => f.write_str("No rows selected"),
            SelectionMode::Explicit => write!(f, "{} rows selected", self.count),
            // Total may be stale.
            SelectionMode::AllExceptExcluded => {
                write!(f, "~{} rows selected across all pages", self.count)
            }
        }
    }
}
