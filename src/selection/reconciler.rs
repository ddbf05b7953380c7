use std::collections::BTreeSet;

use crate::record::{Identify, Page};
use crate::types::identifiers::RecordId;

use super::state::{SelectionState, SelectionStore};

/// Records of `page` that are selected under `state`, in page order.
///
/// Nothing here is cached: call it again whenever the page or the state
/// changes.
pub fn derive_selected<'p, R: Identify>(
    page: &'p Page<R>,
    state: &SelectionState,
) -> Vec<&'p R> {
    page.records
        .iter()
        .filter(|record| state.is_selected(record.id()))
        .collect()
}

/// Ids of [`derive_selected`], for callers that only key rows by id.
pub fn derive_selected_ids<R: Identify>(
    page: &Page<R>,
    state: &SelectionState,
) -> Vec<RecordId> {
    derive_selected(page, state)
        .into_iter()
        .map(|record| record.id())
        .collect()
}

/// Write a row-level selection change for `page` back into the store.
///
/// `newly_selected` is the full selection the widget now shows for this
/// page, so page-wide select/deselect arrive as a full or empty set.
/// Ids in `newly_selected` that are not on `page` are ignored.
pub fn on_row_selection_changed<R, I>(
    store: &mut SelectionStore,
    page: &Page<R>,
    newly_selected: I,
) where
    R: Identify,
    I: IntoIterator,
    I::Item: Identify,
{
    let page_ids: BTreeSet<RecordId> = page.ids().collect();
    let newly_selected: BTreeSet<RecordId> = newly_selected
        .into_iter()
        .map(|record| record.id())
        .collect();

    store.apply_page_delta(&page_ids, &newly_selected);
}
