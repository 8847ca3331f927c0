//! Search session state machine
//!
//! Every user intent and every fetch completion is an [`SessionEvent`]. Events
//! are applied one at a time; the returned [`Transition`] tells the caller
//! whether a fetch has to be started.

use crate::error::SessionError;
use crate::page_size::PageSize;
use crate::pagination::{PageWindow, PaginationView};
use crate::query::{build_query, SearchQuery};
use crate::selection::Selection;
use crate::sort::{SortColumn, SortDirection};
use gh_search_client::{Cursor, FetchError, Page, PageRequest, RepositoryId, RepositoryItem};
use std::fmt;

/// Tag of an issued fetch; only the newest one is honored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the most recent request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// Last fetch succeeded
    Loaded,
    /// Last fetch failed
    Failed,
}

/// A page fetch the caller has to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: Generation,
    pub query: SearchQuery,
    pub page_size: PageSize,
    pub cursor: Option<Cursor>,
    /// Client-side page number the response will be shown as
    pub page: u32,
}

impl FetchRequest {
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::new(self.query.as_str(), self.page_size.get(), self.cursor.clone())
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SubmitSearch(String),
    ChangePageSize(PageSize),
    ChangeSort(SortColumn),
    NextPage,
    PrevPage,
    SelectItem(RepositoryId),
    /// Re-issue the last request after a failure
    Retry,
    FetchSucceeded {
        generation: Generation,
        page: Page,
    },
    FetchFailed {
        generation: Generation,
        error: FetchError,
    },
}

/// Outcome of applying an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State changed and this request must be executed
    Fetch(FetchRequest),
    /// State changed, nothing to fetch
    Updated,
    /// Precondition not met; state is unchanged
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoNextPage,
    OnFirstPage,
    /// Paging is not possible from the current status: NextPage needs a
    /// loaded page to continue from, PrevPage waits for the in-flight fetch
    NotLoaded,
    NothingToRetry,
    /// An identical request is already in flight
    AlreadyInFlight,
    /// Response to a request that has been superseded
    StaleResponse,
}

/// What the result area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsDisplay<'a> {
    /// No search submitted yet
    Welcome,
    Loading,
    Failed(&'a str),
    /// Search completed without matches
    Empty,
    Results(&'a [RepositoryItem]),
}

/// The search session
///
/// Fields are private so that every change goes through [`SearchSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    term: String,
    page_size: PageSize,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
    /// End cursor of the displayed page
    cursor: Option<Cursor>,
    has_next_page: bool,
    total_count: u64,
    results: Option<Vec<RepositoryItem>>,
    status: Status,
    error_message: Option<String>,
    selection: Selection,
    current_page: u32,
    /// Start cursor of each visited page, index 0 is page 1
    page_starts: Vec<Option<Cursor>>,
    generation: Generation,
    in_flight: Option<FetchRequest>,
    last_request: Option<FetchRequest>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl SearchSession {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            term: String::new(),
            page_size,
            sort_column: None,
            sort_direction: SortDirection::default(),
            cursor: None,
            has_next_page: false,
            total_count: 0,
            results: None,
            status: Status::Idle,
            error_message: None,
            selection: Selection::default(),
            current_page: 1,
            page_starts: vec![None],
            generation: Generation::default(),
            in_flight: None,
            last_request: None,
        }
    }

    /// Apply one event
    ///
    /// On `Err` and on [`Transition::Ignored`] the session is unchanged.
    pub fn apply(&mut self, event: SessionEvent) -> Result<Transition, SessionError> {
        match event {
            SessionEvent::SubmitSearch(term) => self.submit_search(&term),
            SessionEvent::ChangePageSize(size) => Ok(self.change_page_size(size)),
            SessionEvent::ChangeSort(column) => Ok(self.change_sort(column)),
            SessionEvent::NextPage => Ok(self.next_page()),
            SessionEvent::PrevPage => Ok(self.prev_page()),
            SessionEvent::SelectItem(id) => self.select_item(&id),
            SessionEvent::Retry => Ok(self.retry()),
            SessionEvent::FetchSucceeded { generation, page } => {
                Ok(self.fetch_succeeded(generation, page))
            }
            SessionEvent::FetchFailed { generation, error } => {
                Ok(self.fetch_failed(generation, &error))
            }
        }
    }

    /// Start a new search, resetting sort and position
    pub fn submit_search(&mut self, term: &str) -> Result<Transition, SessionError> {
        let query = build_query(term, None, SortDirection::default())?;
        if self.is_pending(&query, self.page_size, None, 1) {
            return Ok(Transition::Ignored(IgnoreReason::AlreadyInFlight));
        }

        self.term = query.term().to_string();
        self.sort_column = None;
        self.sort_direction = SortDirection::default();
        self.reset_position();
        self.results = None;
        self.selection.on_results_replaced();
        self.total_count = 0;
        self.has_next_page = false;

        Ok(self.issue(None))
    }

    pub fn change_page_size(&mut self, page_size: PageSize) -> Transition {
        let query = SearchQuery::compose(&self.term, self.sort_column, self.sort_direction);
        if self.is_pending(&query, page_size, None, 1) {
            return Transition::Ignored(IgnoreReason::AlreadyInFlight);
        }

        self.page_size = page_size;
        self.reset_position();

        if !self.has_submitted() {
            return Transition::Updated;
        }
        self.issue(None)
    }

    /// Sort by `column`; the same column again flips the direction
    pub fn change_sort(&mut self, column: SortColumn) -> Transition {
        let direction = if self.sort_column == Some(column) {
            self.sort_direction.toggled()
        } else {
            SortDirection::Descending
        };
        let query = SearchQuery::compose(&self.term, Some(column), direction);
        if self.is_pending(&query, self.page_size, None, 1) {
            return Transition::Ignored(IgnoreReason::AlreadyInFlight);
        }

        self.sort_column = Some(column);
        self.sort_direction = direction;
        self.reset_position();

        if !self.has_submitted() {
            return Transition::Updated;
        }
        self.issue(None)
    }

    pub fn next_page(&mut self) -> Transition {
        if !self.has_next_page {
            return Transition::Ignored(IgnoreReason::NoNextPage);
        }
        if self.status != Status::Loaded {
            return Transition::Ignored(IgnoreReason::NotLoaded);
        }

        // Forget pages beyond the current one, they belong to an older walk
        self.page_starts.truncate(self.current_page as usize);
        self.page_starts.push(self.cursor.clone());
        self.current_page += 1;

        self.issue(self.cursor.clone())
    }

    pub fn prev_page(&mut self) -> Transition {
        if self.current_page <= 1 {
            return Transition::Ignored(IgnoreReason::OnFirstPage);
        }
        // Target cursors come from page_starts, so a failed page can be left
        if !matches!(self.status, Status::Loaded | Status::Failed) {
            return Transition::Ignored(IgnoreReason::NotLoaded);
        }

        self.current_page -= 1;
        let cursor = match self.page_starts.get(self.current_page as usize - 1) {
            Some(cursor) => cursor.clone(),
            None => {
                log::warn!(
                    "No start cursor recorded for page {}, restarting at page 1",
                    self.current_page
                );
                self.reset_position();
                None
            }
        };

        self.issue(cursor)
    }

    pub fn select_item(&mut self, id: &RepositoryId) -> Result<Transition, SessionError> {
        let results = self.results.as_deref().unwrap_or_default();
        self.selection.select(results, id)?;
        Ok(Transition::Updated)
    }

    pub fn retry(&mut self) -> Transition {
        if self.status != Status::Failed {
            return Transition::Ignored(IgnoreReason::NothingToRetry);
        }
        let Some(last) = self.last_request.clone() else {
            return Transition::Ignored(IgnoreReason::NothingToRetry);
        };

        self.current_page = last.page;
        self.issue_request(FetchRequest {
            generation: self.generation.next(),
            ..last
        })
    }

    pub fn fetch_succeeded(&mut self, generation: Generation, page: Page) -> Transition {
        if !self.is_in_flight(generation) {
            log::debug!(
                "Discarding stale response {} (current {})",
                generation,
                self.generation
            );
            return Transition::Ignored(IgnoreReason::StaleResponse);
        }

        self.in_flight = None;
        self.results = Some(page.items);
        self.selection.on_results_replaced();
        self.total_count = page.total_count;
        self.cursor = page.end_cursor;
        self.has_next_page = page.has_next_page;
        self.status = Status::Loaded;
        self.error_message = None;

        Transition::Updated
    }

    pub fn fetch_failed(&mut self, generation: Generation, error: &FetchError) -> Transition {
        if !self.is_in_flight(generation) {
            log::debug!(
                "Discarding stale failure {} (current {}): {}",
                generation,
                self.generation,
                error
            );
            return Transition::Ignored(IgnoreReason::StaleResponse);
        }

        self.in_flight = None;
        self.status = Status::Failed;
        self.error_message = Some(error.to_string());

        Transition::Updated
    }

    // === Derived views ===

    pub fn display(&self) -> ResultsDisplay<'_> {
        match (self.status, self.results.as_deref()) {
            (Status::Idle, None) => ResultsDisplay::Welcome,
            (Status::Loading, _) => ResultsDisplay::Loading,
            (Status::Failed, _) => {
                ResultsDisplay::Failed(self.error_message.as_deref().unwrap_or("unknown error"))
            }
            (_, Some([])) => ResultsDisplay::Empty,
            (_, Some(items)) => ResultsDisplay::Results(items),
            (_, None) => ResultsDisplay::Welcome,
        }
    }

    pub fn pagination(&self) -> PaginationView {
        let loaded = self.status == Status::Loaded;
        let settled = loaded || self.status == Status::Failed;
        PaginationView {
            window: PageWindow::derive(self.total_count, self.page_size.get(), self.current_page),
            current_page: self.current_page,
            page_size: self.page_size,
            total_count: self.total_count,
            can_go_next: self.has_next_page && loaded,
            can_go_prev: self.current_page > 1 && settled,
        }
    }

    /// Id of the result `offset` rows away from the selection
    pub fn neighbor_of_selection(&self, offset: isize) -> Option<&RepositoryId> {
        self.selection
            .neighbor(self.results.as_deref().unwrap_or_default(), offset)
    }

    // === Accessors ===

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn results(&self) -> Option<&[RepositoryItem]> {
        self.results.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn selected(&self) -> Option<&RepositoryItem> {
        self.selection
            .selected_in(self.results.as_deref().unwrap_or_default())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }

    pub fn has_submitted(&self) -> bool {
        !self.term.is_empty()
    }

    // === Internals ===

    fn reset_position(&mut self) {
        self.cursor = None;
        self.current_page = 1;
        self.page_starts = vec![None];
    }

    fn is_in_flight(&self, generation: Generation) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|request| request.generation == generation)
    }

    fn issue(&mut self, cursor: Option<Cursor>) -> Transition {
        let query = SearchQuery::compose(&self.term, self.sort_column, self.sort_direction);
        self.issue_request(FetchRequest {
            generation: self.generation.next(),
            query,
            page_size: self.page_size,
            cursor,
            page: self.current_page,
        })
    }

    /// Whether an identical request is already in flight
    fn is_pending(
        &self,
        query: &SearchQuery,
        page_size: PageSize,
        cursor: Option<&Cursor>,
        page: u32,
    ) -> bool {
        let pending = self.in_flight.as_ref().is_some_and(|request| {
            &request.query == query
                && request.page_size == page_size
                && request.cursor.as_ref() == cursor
                && request.page == page
        });
        if pending {
            log::debug!("Request for '{}' page {} already in flight", query, page);
        }
        pending
    }

    fn issue_request(&mut self, request: FetchRequest) -> Transition {
        self.generation = request.generation;
        self.status = Status::Loading;
        self.error_message = None;
        self.in_flight = Some(request.clone());
        self.last_request = Some(request.clone());

        Transition::Fetch(request)
    }
}
