//! Repository search session
//!
//! The state controller behind the search screen: it owns the submitted term,
//! sort order, page size, pagination cursors and the current result page, and
//! defines every legal transition between them.
//!
//! The session performs no I/O. A transition that needs data returns a
//! [`FetchRequest`]; whoever executes it reports back with
//! [`SessionEvent::FetchSucceeded`] or [`SessionEvent::FetchFailed`] carrying
//! the request's [`Generation`]. Only the response of the newest request is
//! applied, older ones are discarded.
//!
//! ```text
//!   SubmitSearch / ChangeSort / ChangePageSize / NextPage / PrevPage / Retry
//!                               │
//!                               ▼
//!   ┌──────┐  issue  ┌─────────┐  FetchSucceeded(gen)  ┌────────┐
//!   │ Idle │ ──────► │ Loading │ ────────────────────► │ Loaded │
//!   └──────┘         └─────────┘                       └────────┘
//!                         │ FetchFailed(gen)
//!                         ▼
//!                    ┌────────┐
//!                    │ Failed │
//!                    └────────┘
//! ```

pub mod error;
pub mod page_size;
pub mod pagination;
pub mod query;
pub mod selection;
pub mod session;
pub mod sort;

pub use error::{InvalidPageSize, InvalidSelection, SessionError, ValidationError};
pub use page_size::PageSize;
pub use pagination::{PageWindow, PaginationView};
pub use query::{build_query, SearchQuery, MIN_TERM_LENGTH};
pub use selection::Selection;
pub use session::{
    FetchRequest, Generation, IgnoreReason, ResultsDisplay, SearchSession, SessionEvent, Status,
    Transition,
};
pub use sort::{SortColumn, SortDirection};

// Re-export the gateway types the session speaks in
pub use gh_search_client::{Cursor, FetchError, Page, RepositoryId, RepositoryItem};
