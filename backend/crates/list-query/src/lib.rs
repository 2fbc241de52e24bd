//! Search, filter, segment and page-window evaluation over in-memory lists.
//!
//! Every list view in the practice administration console (system logs, the
//! patient roster, the user roster, the practice directory) answers the same
//! question: given the full record set and the view's current selection,
//! which records are visible and how many matched in total? This crate
//! answers it once, parameterised by a per-record-type [`QuerySchema`].
//!
//! # Overview
//!
//! - [`QueryState`] holds the search term, filter selections, segment and
//!   page window, and resets to the first page whenever the narrowing
//!   selection changes.
//! - [`QuerySchema`] names the searchable fields, the categorical filters and
//!   the segment predicates of one record type.
//! - [`QuerySchema::run`] is a pure function of the records and the state: a
//!   stable filter followed by a page window, returning a [`QueryPage`].
//!
//! # Example
//!
//! ```
//! use list_query::{PageSize, QuerySchema, QueryState};
//!
//! #[derive(Clone)]
//! struct LogEntry {
//!     id: String,
//!     status: &'static str,
//! }
//!
//! let schema = QuerySchema::new()
//!     .search_field("id", |log: &LogEntry| log.id.as_str())
//!     .filter("status", |log: &LogEntry| log.status);
//!
//! let logs: Vec<LogEntry> = (0..30)
//!     .map(|n| LogEntry {
//!         id: format!("LOG-{}", 1000 + n),
//!         status: if n % 3 == 0 { "error" } else { "success" },
//!     })
//!     .collect();
//!
//! let state = QueryState::new()
//!     .with_filter("status", "error")
//!     .with_page_size(PageSize::Five);
//! let page = schema.run(&logs, &state);
//!
//! assert_eq!(page.total, 10);
//! assert_eq!(page.items.len(), 5);
//! assert_eq!(page.page_count(), 2);
//! ```

mod error;
mod page;
mod schema;
mod state;

pub use error::QueryError;
pub use page::{Page, QueryPage};
pub use schema::{ALL_SEGMENT_LABEL, FieldAccessor, QuerySchema};
pub use state::{ALL, FilterValue, PageSize, QueryState};
