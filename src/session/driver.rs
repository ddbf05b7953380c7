use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::record::{Identify, Page};
use crate::selection::{
    derive_selected, derive_selected_ids, on_row_selection_changed, parse_count, BulkOutcome,
    BulkScope, BulkSelector, SelectionState, SelectionStore, SelectionSummary,
};
use crate::source::{FetchedPage, PageSource};
use crate::types::errors::{ConfigError, SelectionError, SessionError, TransportError};
use crate::types::identifiers::{Generation, PageNumber, RecordId, SelectionVersion};

use super::config::SessionConfig;

/// Handle for one in-flight page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: Generation,
    pub page: PageNumber,
}

/// The page currently on screen.
#[derive(Debug, Clone)]
pub struct LoadedPage<R> {
    pub page: Page<R>,
    pub generation: Generation,
    pub loaded_at: DateTime<Utc>, // informational only
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page is now current; `selected` is its reconciled selection.
    Applied { selected: Vec<RecordId> },
    /// A newer request was issued after this one; the response was dropped.
    Superseded,
    /// The fetch failed; page and selection are unchanged.
    Failed,
}

/// One browsing session: the selection store, the page on screen, and the
/// bookkeeping that keeps late responses from overwriting newer ones.
///
/// Single-threaded and event driven. Callers that fetch asynchronously use
/// [`request_page`](Self::request_page) / [`complete`](Self::complete);
/// synchronous sources can go through [`load`](Self::load).
#[derive(Debug)]
pub struct Session<R> {
    config: SessionConfig,
    store: SelectionStore,
    bulk: BulkSelector,
    current: Option<LoadedPage<R>>,
    latest: Generation,
    pending: Option<PageRequest>,
}

impl<R: Identify> Session<R> {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            store: SelectionStore::new(),
            bulk: BulkSelector::new(),
            current: None,
            latest: Generation::default(),
            pending: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionState {
        self.store.state()
    }

    pub fn current(&self) -> Option<&LoadedPage<R>> {
        self.current.as_ref()
    }

    pub fn current_page(&self) -> Option<&Page<R>> {
        self.current.as_ref().map(|loaded| &loaded.page)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start loading `page`. Any request issued earlier becomes stale.
    pub fn request_page(&mut self, page: PageNumber) -> PageRequest {
        let request = PageRequest {
            generation: self.latest.bump(),
            page,
        };
        self.pending = Some(request);
        debug!(page = %page, generation = request.generation.get(), "requested page");
        request
    }

    /// Deliver the result of a fetch started with [`request_page`](Self::request_page).
    ///
    /// Reconciliation uses the selection as it is now, not as it was when
    /// the request went out.
    pub fn complete(
        &mut self,
        request: PageRequest,
        result: Result<FetchedPage<R>, TransportError>,
    ) -> PageOutcome {
        if request.generation != self.latest {
            debug!(
                page = %request.page,
                generation = request.generation.get(),
                latest = self.latest.get(),
                "dropping superseded page response"
            );
            return PageOutcome::Superseded;
        }
        self.pending = None;

        let fetched = match result {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(page = %request.page, error = %err, "page fetch failed");
                return PageOutcome::Failed;
            }
        };

        self.store.set_total_count(fetched.total_count);
        let page = Page::new(request.page, self.config.page_size, fetched.records);
        let selected = derive_selected_ids(&page, self.store.state());
        debug!(
            page = %request.page,
            records = page.len(),
            selected = selected.len(),
            total = fetched.total_count,
            "applied page"
        );

        self.current = Some(LoadedPage {
            page,
            generation: request.generation,
            loaded_at: Utc::now(),
        });
        PageOutcome::Applied { selected }
    }

    /// Request, fetch and complete `page` in one go.
    pub fn load<S>(&mut self, source: &S, page: PageNumber) -> PageOutcome
    where
        S: PageSource<R> + ?Sized,
    {
        let request = self.request_page(page);
        let result = source.fetch_page(page, self.config.page_size);
        self.complete(request, result)
    }

    /// Records of the current page that render as selected.
    pub fn selected_rows(&self) -> Vec<&R> {
        match &self.current {
            Some(loaded) => derive_selected(&loaded.page, self.store.state()),
            None => Vec::new(),
        }
    }

    /// Widget callback for any checkbox change on the current page.
    /// A no-op while no page is loaded.
    pub fn on_row_selection_changed<I>(&mut self, newly_selected: I)
    where
        I: IntoIterator,
        I::Item: Identify,
    {
        if let Some(loaded) = &self.current {
            on_row_selection_changed(&mut self.store, &loaded.page, newly_selected);
        }
    }

    pub fn bulk_input(&self) -> &str {
        self.bulk.input()
    }

    pub fn set_bulk_input(&mut self, input: impl Into<String>) {
        self.bulk.set_input(input);
    }

    /// Apply the pending bulk input against the current page only.
    pub fn apply_bulk(&mut self) -> Result<BulkOutcome, SelectionError> {
        let empty;
        let page = match &self.current {
            Some(loaded) => &loaded.page,
            None => {
                empty = Page::new(PageNumber::FIRST, self.config.page_size, Vec::new());
                &empty
            }
        };
        self.bulk.apply(&mut self.store, page)
    }

    /// Apply the pending bulk input, honoring the configured [`BulkScope`].
    ///
    /// With `AcrossPages`, pages up to the requested rank are fetched from
    /// `source` before anything is mutated; a fetch failure leaves the
    /// selection untouched.
    pub fn apply_bulk_with<S>(&mut self, source: &S) -> Result<BulkOutcome, SessionError>
    where
        S: PageSource<R> + ?Sized,
    {
        if self.config.bulk_scope == BulkScope::CurrentPage {
            return Ok(self.apply_bulk()?);
        }

        let n = parse_count(self.bulk.input())?;
        let requested = self.store.state().check_count(n)?;
        let page_size = self.config.page_size;
        let last_page = requested.div_ceil(page_size as u64);

        // Only ids ranked <= requested are kept; fetched records are dropped
        // as soon as their ids are read.
        let current = self.current.as_ref().map(|loaded| &loaded.page);
        let mut ranked_ids: Vec<Page<RecordId>> = Vec::new();
        if let Some(page) = current {
            ranked_ids.push(ids_up_to(page, requested));
        }
        let mut number = PageNumber::FIRST;
        let mut fetches = 0usize;
        for _ in 0..last_page {
            if current.map(|page| page.number) != Some(number) {
                let FetchedPage { records, .. } = source.fetch_page(number, page_size)?;
                fetches += 1;
                let short = records.len() < page_size;
                let page = Page::new(number, page_size, records);
                ranked_ids.push(ids_up_to(&page, requested));
                if short {
                    break;
                }
            }
            number = number.next();
        }
        debug!(requested, fetches, "enumerated pages for bulk selection");

        let pages = ranked_ids.iter();
        Ok(self.bulk.apply_across(&mut self.store, pages)?)
    }

    /// Select every record across all pages.
    pub fn select_all(&mut self) {
        self.store.select_all();
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary::of(self.store.state())
    }

    pub fn selection_version(&self) -> SelectionVersion {
        self.store.state().version()
    }
}

/// Ids of `page` ranked `<= limit`, as a page of ids at the same position.
fn ids_up_to<R: Identify>(page: &Page<R>, limit: u64) -> Page<RecordId> {
    let room = limit.saturating_sub(page.number.offset(page.page_size));
    let keep = usize::try_from(room).unwrap_or(usize::MAX);
    let ids = page.records.iter().take(keep).map(|record| record.id()).collect();
    Page::new(page.number, page.page_size, ids)
}
