//! Error Types
//!
//! Transport failures, client-side validation failures, and their union.

use thiserror::Error;

use crate::book::BookField;

/// Failure talking to the books endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} answered with HTTP {status}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Form contents that cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("field `{0}` is required")]
    MissingField(BookField),
    #[error("year must be an integer, got {0:?}")]
    InvalidYear(String),
}

/// Error returned by catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Draft(#[from] DraftError),
}
