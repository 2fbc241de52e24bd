//! Field-accessor configuration and query evaluation.
//!
//! A [`QuerySchema`] tells the engine which fields of a record type take part
//! in free-text search, which fields back categorical filters, and which
//! predicates define the segments (tabs) above a list. Evaluation is a pure,
//! stable filter followed by a page window; the input slice is never
//! reordered or mutated.

use std::fmt;

use tracing::debug;

use crate::error::QueryError;
use crate::page::QueryPage;
use crate::state::{PageSize, QueryState};

/// Borrowing accessor for one string-valued record field.
pub type FieldAccessor<R> = fn(&R) -> &str;

/// Label of the implicit first segment, which matches every record.
pub const ALL_SEGMENT_LABEL: &str = "All";

type SegmentRule<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

struct NamedField<R> {
    name: &'static str,
    accessor: FieldAccessor<R>,
}

struct Segment<R> {
    label: &'static str,
    rule: SegmentRule<R>,
}

/// Query configuration for one record type.
///
/// # Examples
///
/// ```
/// use list_query::{QuerySchema, QueryState};
///
/// struct Entry {
///     id: String,
///     status: &'static str,
/// }
///
/// let schema = QuerySchema::new()
///     .search_field("id", |e: &Entry| e.id.as_str())
///     .filter("status", |e: &Entry| e.status);
///
/// let entries = vec![
///     Entry { id: "LOG-1".to_owned(), status: "error" },
///     Entry { id: "LOG-2".to_owned(), status: "success" },
/// ];
/// let state = QueryState::new().with_filter("status", "error");
/// let page = schema.run(&entries, &state);
///
/// assert_eq!(page.total, 1);
/// assert_eq!(page.items.first().map(|e| e.id.as_str()), Some("LOG-1"));
/// ```
pub struct QuerySchema<R> {
    search_fields: Vec<NamedField<R>>,
    filters: Vec<NamedField<R>>,
    segments: Vec<Segment<R>>,
}

impl<R> Default for QuerySchema<R> {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            filters: Vec::new(),
            segments: Vec::new(),
        }
    }
}

impl<R> fmt::Debug for QuerySchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuerySchema")
            .field(
                "search_fields",
                &self.search_fields.iter().map(|field| field.name).collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|field| field.name).collect::<Vec<_>>(),
            )
            .field("segments", &self.segment_labels())
            .finish()
    }
}

impl<R> QuerySchema<R> {
    /// Create a schema with no searchable fields, filters or segments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the set matched by free-text search.
    #[must_use]
    pub fn search_field(mut self, name: &'static str, accessor: FieldAccessor<R>) -> Self {
        self.search_fields.push(NamedField { name, accessor });
        self
    }

    /// Register a categorical filter backed by `accessor`.
    #[must_use]
    pub fn filter(mut self, name: &'static str, accessor: FieldAccessor<R>) -> Self {
        self.filters.push(NamedField { name, accessor });
        self
    }

    /// Register the next segment. The first call defines segment 1; segment
    /// 0 always matches everything.
    #[must_use]
    pub fn segment<F>(mut self, label: &'static str, rule: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.segments.push(Segment {
            label,
            rule: Box::new(rule),
        });
        self
    }

    /// Segment labels in tab order, starting with the implicit "All" tab.
    #[must_use]
    pub fn segment_labels(&self) -> Vec<&'static str> {
        std::iter::once(ALL_SEGMENT_LABEL)
            .chain(self.segments.iter().map(|segment| segment.label))
            .collect()
    }

    /// Names of the registered filters, in registration order.
    pub fn filter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.iter().map(|field| field.name)
    }

    /// Names of the fields searched by free text, in registration order.
    pub fn search_field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.search_fields.iter().map(|field| field.name)
    }

    /// Vet a state against this schema before evaluation.
    ///
    /// Evaluation itself is total: unknown filters are ignored and an
    /// out-of-range segment matches nothing. Adapters call this to reject
    /// such input instead.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownFilter`] for a filter name the schema
    /// does not define, or [`QueryError::UnknownSegment`] when the segment
    /// index is past the configured tabs.
    pub fn check(&self, state: &QueryState) -> Result<(), QueryError> {
        if let Some((name, _)) = state
            .filters()
            .find(|(name, _)| self.filter_field(name).is_none())
        {
            return Err(QueryError::UnknownFilter {
                name: name.to_owned(),
            });
        }

        let available = self.segments.len().saturating_add(1);
        if state.segment() >= available {
            return Err(QueryError::UnknownSegment {
                segment: state.segment(),
                available,
            });
        }
        Ok(())
    }

    /// Returns `true` when `record` passes the search, filter and segment
    /// predicates of `state`.
    #[must_use]
    pub fn matches(&self, record: &R, state: &QueryState) -> bool {
        let needle = state.search().to_lowercase();
        self.matches_with_needle(record, &needle, state)
    }

    /// Every record passing `state`, in source order, ignoring pagination.
    #[must_use]
    pub fn filter_records<'a>(&self, records: &'a [R], state: &QueryState) -> Vec<&'a R> {
        let needle = state.search().to_lowercase();
        records
            .iter()
            .filter(|record| self.matches_with_needle(record, &needle, state))
            .collect()
    }

    /// Evaluate `state` against `records` and cut out the requested page.
    ///
    /// The page window is `[page * size, page * size + size)` over the
    /// filtered sequence. Pages past the end, and negative pages, yield an
    /// empty window; the page is never clamped.
    #[must_use]
    pub fn run<'a>(&self, records: &'a [R], state: &QueryState) -> QueryPage<'a, R> {
        let matching = self.filter_records(records, state);
        let total = matching.len();
        let items = page_window(matching, state.page(), state.page_size());

        debug!(
            records = records.len(),
            total,
            returned = items.len(),
            page = state.page(),
            page_size = state.page_size().get(),
            "list query evaluated"
        );

        QueryPage {
            items,
            total,
            page: state.page(),
            page_size: state.page_size(),
        }
    }

    /// Distinct values of a filter field in first-seen order.
    ///
    /// Returns an empty list when `filter` is not registered.
    #[must_use]
    pub fn filter_options(&self, records: &[R], filter: &str) -> Vec<String> {
        let Some(field) = self.filter_field(filter) else {
            return Vec::new();
        };

        let mut options: Vec<String> = Vec::new();
        for record in records {
            let value = (field.accessor)(record);
            if !options.iter().any(|seen| seen == value) {
                options.push(value.to_owned());
            }
        }
        options
    }

    fn filter_field(&self, name: &str) -> Option<&NamedField<R>> {
        self.filters.iter().find(|field| field.name == name)
    }

    fn matches_with_needle(&self, record: &R, needle: &str, state: &QueryState) -> bool {
        self.matches_search(record, needle)
            && self.matches_filters(record, state)
            && self.matches_segment(record, state.segment())
    }

    fn matches_search(&self, record: &R, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields
                .iter()
                .any(|field| (field.accessor)(record).to_lowercase().contains(needle))
    }

    fn matches_filters(&self, record: &R, state: &QueryState) -> bool {
        state.filters().all(|(name, value)| {
            if value.is_all() {
                return true;
            }
            self.filter_field(name)
                .is_none_or(|field| value.matches((field.accessor)(record)))
        })
    }

    fn matches_segment(&self, record: &R, segment: usize) -> bool {
        match segment.checked_sub(1) {
            None => true,
            Some(index) => self
                .segments
                .get(index)
                .is_some_and(|segment_def| (segment_def.rule)(record)),
        }
    }
}

fn page_window<T>(items: Vec<T>, page: i64, page_size: PageSize) -> Vec<T> {
    let Ok(page_index) = usize::try_from(page) else {
        return Vec::new();
    };
    let Some(start) = page_index.checked_mul(page_size.get()) else {
        return Vec::new();
    };
    items.into_iter().skip(start).take(page_size.get()).collect()
}
