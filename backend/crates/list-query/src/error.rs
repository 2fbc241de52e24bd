//! Error types for query-state parsing and schema checks.
//!
//! Evaluating a query never fails; these errors only surface when an adapter
//! builds a [`crate::QueryState`] from untrusted input or asks a schema to
//! vet one before evaluation.

use thiserror::Error;

/// Errors raised while building or checking a query state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The requested page size is not one of the supported window sizes.
    #[error("unsupported page size {actual}; expected one of 5, 10, 25")]
    UnsupportedPageSize {
        /// Page size that was requested.
        actual: u32,
    },

    /// A numeric query parameter could not be parsed.
    #[error("invalid number for {key}: '{value}'")]
    InvalidNumber {
        /// Query parameter name.
        key: String,
        /// Raw value supplied for the parameter.
        value: String,
    },

    /// The state names a filter the record schema does not define.
    #[error("unknown filter '{name}'")]
    UnknownFilter {
        /// Filter name that was not recognised.
        name: String,
    },

    /// The state selects a segment past the schema's configured tabs.
    #[error("segment {segment} is out of range; {available} segments are defined")]
    UnknownSegment {
        /// Requested segment index.
        segment: usize,
        /// Number of segments available, including the implicit "All" tab.
        available: usize,
    },
}

impl QueryError {
    /// Name of the query parameter the error relates to.
    ///
    /// # Examples
    ///
    /// ```
    /// use list_query::QueryError;
    ///
    /// let err = QueryError::UnsupportedPageSize { actual: 7 };
    /// assert_eq!(err.field(), "pageSize");
    /// ```
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UnsupportedPageSize { .. } => "pageSize",
            Self::InvalidNumber { key, .. } => key,
            Self::UnknownFilter { name } => name,
            Self::UnknownSegment { .. } => "segment",
        }
    }

    /// Stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedPageSize { .. } => "unsupported_page_size",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::UnknownFilter { .. } => "unknown_filter",
            Self::UnknownSegment { .. } => "unknown_segment",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        QueryError::UnsupportedPageSize { actual: 7 },
        "unsupported page size 7; expected one of 5, 10, 25"
    )]
    #[case(
        QueryError::InvalidNumber { key: "page".to_owned(), value: "two".to_owned() },
        "invalid number for page: 'two'"
    )]
    #[case(
        QueryError::UnknownFilter { name: "colour".to_owned() },
        "unknown filter 'colour'"
    )]
    #[case(
        QueryError::UnknownSegment { segment: 4, available: 3 },
        "segment 4 is out of range; 3 segments are defined"
    )]
    fn errors_format_correctly(#[case] err: QueryError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    #[case(QueryError::UnsupportedPageSize { actual: 3 }, "pageSize", "unsupported_page_size")]
    #[case(
        QueryError::InvalidNumber { key: "segment".to_owned(), value: "x".to_owned() },
        "segment",
        "invalid_number"
    )]
    #[case(QueryError::UnknownFilter { name: "role".to_owned() }, "role", "unknown_filter")]
    #[case(QueryError::UnknownSegment { segment: 9, available: 1 }, "segment", "unknown_segment")]
    fn errors_expose_field_and_code(
        #[case] err: QueryError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        assert_eq!(err.field(), field);
        assert_eq!(err.code(), code);
    }
}
