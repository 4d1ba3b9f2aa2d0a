//! Libreria Core
//!
//! Framework-free domain layer for the book catalog UI:
//! - book: the record and its JSON wire format
//! - draft: form buffers and client-side validation
//! - query: filtering, sorting and genre listing
//! - catalog: in-memory session state and reconciliation rules
//! - api: the REST transport contract and an in-memory implementation
//! - ops: async operations that talk to the API and log failures

mod book;
mod catalog;
mod config;
mod draft;
mod error;
mod query;

pub mod api;
pub mod ops;

pub use book::{Book, BookField, BookId, NewBook};
pub use catalog::{Catalog, EditSession, Outcome, Submission};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use draft::BookDraft;
pub use error::{ApiError, CatalogError, DraftError};
pub use query::{genres, BookQuery, SortKey};
