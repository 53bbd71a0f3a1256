//! Error types for inkpost-core operations

use thiserror::Error;

use crate::validate::ValidationErrors;

/// Result type alias for inkpost-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Domain error for store and query operations.
///
/// Every variant maps to a client-visible failure; the HTTP layer decides
/// the status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No post in the store carries this id
    #[error("Post with id {id} not found")]
    PostNotFound { id: u64 },

    /// One or more required fields are missing or blank
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// The `sort` parameter names a field outside the sortable set
    #[error("Invalid sort field '{field}', expected one of: title, content, id")]
    InvalidSortField { field: String },

    /// A `page`/`limit` parameter that does not parse as an integer
    #[error("Parameter '{param}' must be a non-negative integer")]
    InvalidPageParam { param: &'static str },

    /// A search request without any usable search parameter
    #[error("No search parameter provided, expected one of: title, content, category")]
    MissingSearchTerm,
}
