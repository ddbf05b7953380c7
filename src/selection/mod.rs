pub mod bulk;
pub mod reconciler;
pub mod state;
pub mod summary;

pub use bulk::{parse_count, BulkScope, BulkSelector};
pub use reconciler::{derive_selected, derive_selected_ids, on_row_selection_changed};
pub use state::{ActiveSet, BulkOutcome, SelectionMode, SelectionState, SelectionStore};
pub use summary::SelectionSummary;
