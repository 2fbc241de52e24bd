//! Page windows produced by query evaluation.

use serde::{Deserialize, Serialize};

use crate::state::PageSize;

/// Borrowed page of matching records.
///
/// `total` counts every record that passed the predicates, not only the
/// records in `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage<'a, R> {
    /// Records in the requested window, in source order.
    pub items: Vec<&'a R>,
    /// Number of records matching the query before pagination.
    pub total: usize,
    /// Requested zero-based page index.
    pub page: i64,
    /// Requested window size.
    pub page_size: PageSize,
}

impl<R> QueryPage<'_, R> {
    /// Number of pages needed to show every matching record.
    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    /// Returns `true` when the window holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clone the windowed records into an owned, serialisable [`Page`].
    #[must_use]
    pub fn into_owned(self) -> Page<R>
    where
        R: Clone,
    {
        Page {
            items: self.items.into_iter().cloned().collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            page_count: page_count(self.total, self.page_size),
        }
    }
}

/// Owned page envelope returned to adapters.
///
/// # Examples
///
/// ```
/// use list_query::{PageSize, QuerySchema, QueryState};
///
/// let schema: QuerySchema<String> = QuerySchema::new().search_field("value", String::as_str);
/// let records = vec!["alpha".to_owned(), "beta".to_owned()];
/// let page = schema.run(&records, &QueryState::new()).into_owned();
///
/// assert_eq!(page.total, 2);
/// assert_eq!(page.page_count, 1);
/// assert_eq!(page.page_size, PageSize::Ten);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records in the requested window.
    pub items: Vec<T>,
    /// Number of records matching the query before pagination.
    pub total: usize,
    /// Requested zero-based page index.
    pub page: i64,
    /// Requested window size.
    pub page_size: PageSize,
    /// Number of pages needed to show every matching record.
    pub page_count: usize,
}

fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}
