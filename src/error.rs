//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for search engine operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while building or executing a search.
///
/// All variants are caller-input errors detected synchronously: the first two
/// at builder call time, all four again at execution time. None
/// are retryable and none produce partial results; the query-builder layer is
/// expected to surface them as user-facing validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The search query was missing or blank after trimming.
    #[error("search query is empty")]
    EmptyQuery,

    /// A `search()` call (or the resolved field at execution time) named a
    /// field other than the one the index declares as searchable.
    #[error("field '{field}' does not match search field '{index_field}' declared by the index")]
    FieldMismatch { field: String, index_field: String },

    /// An `eq()` call referenced a field outside the index's filter-field set.
    #[error("field '{field}' is not a filter field on index '{index}'")]
    InvalidFilterField { field: String, index: String },

    /// A non-blank query yielded zero terms and zero phrases after parsing
    /// (e.g. a query consisting solely of punctuation).
    #[error("search query contains no valid terms or phrases")]
    NoValidTerms,
}
