//! Books API Contract
//!
//! Abstract transport for the `/api/libri` endpoint family.
//! The browser implementation lives in the UI crate; `MemoryBookApi`
//! keeps everything in process.

mod memory;

use async_trait::async_trait;

use crate::book::{Book, BookId, NewBook};
use crate::error::ApiError;

pub use memory::MemoryBookApi;

/// REST operations on the book collection
///
/// Futures are not `Send`: the UI runs on the single WASM thread.
#[async_trait(?Send)]
pub trait BookApi {
    /// `GET {base}`: the full list, no pagination
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;

    /// `POST {base}`: returns the record with its assigned id
    async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError>;

    /// `PUT {base}/{id}`: full replacement of the four fields
    async fn update_book(&self, id: BookId, book: &NewBook) -> Result<Book, ApiError>;

    /// `DELETE {base}/{id}`
    async fn delete_book(&self, id: BookId) -> Result<(), ApiError>;

    /// `DELETE {base}`: removes every record
    async fn delete_all_books(&self) -> Result<(), ApiError>;
}
