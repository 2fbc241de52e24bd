//! Query state owned by a list view.
//!
//! A [`QueryState`] captures the free-text search, the categorical filter
//! selections, the active segment (tab) and the page window. Changing the
//! search, a filter or the segment moves the view back to the first page.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Sentinel filter value meaning "no constraint".
pub const ALL: &str = "all";

/// Supported page window sizes.
///
/// Serialised as the plain number of rows.
///
/// # Examples
///
/// ```
/// use list_query::PageSize;
///
/// assert_eq!(PageSize::default().get(), 10);
/// assert_eq!(PageSize::try_from(25).map(PageSize::get), Ok(25));
/// assert!(PageSize::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    /// Five rows per page.
    Five,
    /// Ten rows per page.
    #[default]
    Ten,
    /// Twenty-five rows per page.
    TwentyFive,
}

impl PageSize {
    /// Every supported size, smallest first.
    pub const OPTIONS: [Self; 3] = [Self::Five, Self::Ten, Self::TwentyFive];

    /// Number of rows in one page.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::TwentyFive => 25,
        }
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        match value {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = QueryError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            25 => Ok(Self::TwentyFive),
            actual => Err(QueryError::UnsupportedPageSize { actual }),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Selected value of one categorical filter.
///
/// The literal `"all"` and the empty string both parse to [`FilterValue::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    /// No constraint on the field.
    #[default]
    All,
    /// The field must equal this value exactly (case-sensitive).
    Exact(String),
}

impl FilterValue {
    /// Parse a raw selection, mapping the sentinel to [`FilterValue::All`].
    ///
    /// # Examples
    ///
    /// ```
    /// use list_query::FilterValue;
    ///
    /// assert_eq!(FilterValue::parse("all"), FilterValue::All);
    /// assert_eq!(FilterValue::parse("error"), FilterValue::Exact("error".to_owned()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL {
            Self::All
        } else {
            Self::Exact(raw.to_owned())
        }
    }

    /// Returns `true` when `candidate` satisfies this selection.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == candidate,
        }
    }

    /// Returns `true` for the "no constraint" sentinel.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// String form of the selection.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Exact(value) => value,
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL {
            Self::All
        } else {
            Self::Exact(value)
        }
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::All => ALL.to_owned(),
            FilterValue::Exact(inner) => inner,
        }
    }
}

/// Search, filter, segment and pagination selection for one list view.
///
/// `page` is zero-based and signed: a negative page can be represented so
/// that malformed input evaluates to an empty window rather than an error.
///
/// # Examples
///
/// ```
/// use list_query::{FilterValue, PageSize, QueryState};
///
/// let mut state = QueryState::new();
/// state.set_page(3);
/// state.set_filter("status", "error");
///
/// assert_eq!(state.page(), 0);
/// assert_eq!(state.filter("status"), &FilterValue::Exact("error".to_owned()));
/// assert_eq!(state.page_size(), PageSize::Ten);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    search: String,
    filters: BTreeMap<String, FilterValue>,
    segment: usize,
    page: i64,
    page_size: PageSize,
}

static ALL_FILTER: FilterValue = FilterValue::All;

impl QueryState {
    /// Create an unconstrained state on the first page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from URL query pairs.
    ///
    /// `search` (or its alias `q`), `segment`, `page` and `pageSize` are
    /// reserved; every other key is read as a filter selection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidNumber`] when a numeric parameter does
    /// not parse and [`QueryError::UnsupportedPageSize`] for a page size
    /// outside 5, 10 and 25.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = Self::default();
        let mut requested_page = 0;

        for (raw_key, raw_value) in pairs {
            let key = raw_key.as_ref();
            let value = raw_value.as_ref();
            match key {
                "search" | "q" => value.clone_into(&mut state.search),
                "segment" => state.segment = parse_number(key, value)?,
                "page" => requested_page = parse_number(key, value)?,
                "pageSize" => {
                    state.page_size = PageSize::try_from(parse_number::<u32>(key, value)?)?;
                }
                _ => {
                    state.filters.insert(key.to_owned(), FilterValue::parse(value));
                }
            }
        }

        state.page = requested_page;
        Ok(state)
    }

    /// Build a state from a raw query string (with or without a leading `?`).
    ///
    /// # Errors
    ///
    /// See [`QueryState::from_query_pairs`].
    ///
    /// # Examples
    ///
    /// ```
    /// use list_query::{PageSize, QueryState};
    ///
    /// let state = QueryState::from_query_string("?q=smith&status=active&page=2&pageSize=5")
    ///     .expect("valid query");
    /// assert_eq!(state.search(), "smith");
    /// assert_eq!(state.page(), 2);
    /// assert_eq!(state.page_size(), PageSize::Five);
    /// ```
    pub fn from_query_string(query: &str) -> Result<Self, QueryError> {
        let trimmed = query.strip_prefix('?').unwrap_or(query);
        Self::from_query_pairs(url::form_urlencoded::parse(trimmed.as_bytes()))
    }

    /// Current free-text search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selection for `name`, defaulting to [`FilterValue::All`].
    #[must_use]
    pub fn filter(&self, name: &str) -> &FilterValue {
        self.filters.get(name).unwrap_or(&ALL_FILTER)
    }

    /// Every explicit filter selection, ordered by filter name.
    pub fn filters(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.filters.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Selected segment (tab) index; 0 is the unconstrained tab.
    #[must_use]
    pub const fn segment(&self) -> usize {
        self.segment
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns `true` when no search, filter or segment narrows the list.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.segment == 0
            && self.filters.values().all(FilterValue::is_all)
    }

    /// Replace the search term and return to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    /// Select a filter value and return to the first page.
    pub fn set_filter(&mut self, name: impl Into<String>, value: &str) {
        self.filters.insert(name.into(), FilterValue::parse(value));
        self.page = 0;
    }

    /// Reset a filter to "all" and return to the first page.
    pub fn clear_filter(&mut self, name: &str) {
        self.filters.remove(name);
        self.page = 0;
    }

    /// Switch segment and return to the first page.
    pub fn set_segment(&mut self, segment: usize) {
        self.segment = segment;
        self.page = 0;
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    /// Move to `page` without touching any other selection.
    pub fn set_page(&mut self, page: i64) {
        self.page = page;
    }

    /// Builder form of [`QueryState::set_search`].
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    /// Builder form of [`QueryState::set_filter`].
    #[must_use]
    pub fn with_filter(mut self, name: impl Into<String>, value: &str) -> Self {
        self.set_filter(name, value);
        self
    }

    /// Builder form of [`QueryState::set_segment`].
    #[must_use]
    pub fn with_segment(mut self, segment: usize) -> Self {
        self.set_segment(segment);
        self
    }

    /// Builder form of [`QueryState::set_page_size`].
    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Builder form of [`QueryState::set_page`]; apply it last, since the
    /// other builders reset the page.
    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.set_page(page);
        self
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, QueryError>
where
    T: FromStr,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|_| QueryError::InvalidNumber {
            key: key.to_owned(),
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    //! Covers query-state transitions and query-string parsing.

    use rstest::rstest;

    use super::*;

    #[test]
    fn default_state_is_unconstrained_first_page() {
        let state = QueryState::new();
        assert!(state.is_unconstrained());
        assert_eq!(state.page(), 0);
        assert_eq!(state.page_size(), PageSize::Ten);
        assert!(state.filter("status").is_all());
    }

    #[rstest]
    #[case::search(|s: &mut QueryState| s.set_search("smith"))]
    #[case::filter(|s: &mut QueryState| s.set_filter("status", "error"))]
    #[case::clear_filter(|s: &mut QueryState| s.clear_filter("status"))]
    #[case::segment(|s: &mut QueryState| s.set_segment(2))]
    #[case::page_size(|s: &mut QueryState| s.set_page_size(PageSize::TwentyFive))]
    fn narrowing_changes_reset_page(#[case] change: fn(&mut QueryState)) {
        let mut state = QueryState::new();
        state.set_page(4);
        change(&mut state);
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn set_page_keeps_other_selections() {
        let mut state = QueryState::new().with_search("smith").with_segment(1);
        state.set_page(2);
        assert_eq!(state.search(), "smith");
        assert_eq!(state.segment(), 1);
        assert_eq!(state.page(), 2);
    }

    #[rstest]
    #[case("all", FilterValue::All)]
    #[case("", FilterValue::All)]
    #[case("error", FilterValue::Exact("error".to_owned()))]
    #[case("All", FilterValue::Exact("All".to_owned()))]
    fn filter_values_parse_sentinel(#[case] raw: &str, #[case] expected: FilterValue) {
        assert_eq!(FilterValue::parse(raw), expected);
    }

    #[test]
    fn exact_filter_is_case_sensitive() {
        let value = FilterValue::parse("error");
        assert!(value.matches("error"));
        assert!(!value.matches("Error"));
    }

    #[test]
    fn parses_full_query_string() {
        let state = QueryState::from_query_string(
            "search=John%20Smith&status=active&practice=Oceanview+Healthcare&segment=1&page=3&pageSize=25",
        )
        .expect("valid query");

        assert_eq!(state.search(), "John Smith");
        assert_eq!(state.filter("status"), &FilterValue::Exact("active".to_owned()));
        assert_eq!(
            state.filter("practice"),
            &FilterValue::Exact("Oceanview Healthcare".to_owned())
        );
        assert_eq!(state.segment(), 1);
        assert_eq!(state.page(), 3);
        assert_eq!(state.page_size(), PageSize::TwentyFive);
    }

    #[test]
    fn page_survives_parameter_order() {
        let state = QueryState::from_query_string("page=2&q=smith").expect("valid query");
        assert_eq!(state.page(), 2);
        assert_eq!(state.search(), "smith");
    }

    #[test]
    fn negative_page_is_representable() {
        let state = QueryState::from_query_string("page=-1").expect("valid query");
        assert_eq!(state.page(), -1);
    }

    #[rstest]
    #[case("page=two", QueryError::InvalidNumber { key: "page".to_owned(), value: "two".to_owned() })]
    #[case("segment=-1", QueryError::InvalidNumber { key: "segment".to_owned(), value: "-1".to_owned() })]
    #[case("pageSize=7", QueryError::UnsupportedPageSize { actual: 7 })]
    fn rejects_malformed_numbers(#[case] query: &str, #[case] expected: QueryError) {
        assert_eq!(QueryState::from_query_string(query), Err(expected));
    }

    #[test]
    fn page_size_serialises_as_number() {
        let json = serde_json::to_string(&PageSize::TwentyFive).expect("serialise");
        assert_eq!(json, "25");
        let parsed: Result<PageSize, _> = serde_json::from_str("6");
        assert!(parsed.is_err());
    }
}
