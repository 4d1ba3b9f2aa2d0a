//! In-Memory Books API
//!
//! Behaves like the REST backend without a network: sequential ids,
//! full-replace updates, 404 for unknown ids.

use std::cell::RefCell;

use async_trait::async_trait;

use super::BookApi;
use crate::book::{Book, BookId, NewBook};
use crate::error::ApiError;

#[derive(Debug)]
struct MemoryState {
    books: Vec<Book>,
    next_id: BookId,
    pending_failure: Option<ApiError>,
    requests: usize,
}

/// `BookApi` backed by a `Vec` behind a `RefCell`
#[derive(Debug)]
pub struct MemoryBookApi {
    state: RefCell<MemoryState>,
}

impl Default for MemoryBookApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookApi {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(MemoryState {
                books: Vec::new(),
                next_id: 1,
                pending_failure: None,
                requests: 0,
            }),
        }
    }

    /// Start with the given records already stored, ids assigned in order
    pub fn with_books(books: impl IntoIterator<Item = NewBook>) -> Self {
        let api = Self::new();
        {
            let mut state = api.state.borrow_mut();
            for book in books {
                let id = state.next_id;
                state.next_id += 1;
                state.books.push(book.with_id(id));
            }
        }
        api
    }

    /// Make the next request fail with `error`
    pub fn fail_next(&self, error: ApiError) {
        self.state.borrow_mut().pending_failure = Some(error);
    }

    /// Number of requests received so far, failed ones included
    pub fn request_count(&self) -> usize {
        self.state.borrow().requests
    }

    /// Current server-side contents
    pub fn stored(&self) -> Vec<Book> {
        self.state.borrow().books.clone()
    }

    fn begin(&self) -> Result<std::cell::RefMut<'_, MemoryState>, ApiError> {
        let mut state = self.state.borrow_mut();
        state.requests += 1;
        let failure = state.pending_failure.take();
        match failure {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

fn not_found(id: BookId) -> ApiError {
    ApiError::Status {
        status: 404,
        url: format!("memory:/api/libri/{}", id),
    }
}

#[async_trait(?Send)]
impl BookApi for MemoryBookApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let state = self.begin()?;
        Ok(state.books.clone())
    }

    async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        let mut state = self.begin()?;
        let id = state.next_id;
        state.next_id += 1;
        let created = book.clone().with_id(id);
        state.books.push(created.clone());
        Ok(created)
    }

    async fn update_book(&self, id: BookId, book: &NewBook) -> Result<Book, ApiError> {
        let mut state = self.begin()?;
        let existing = state
            .books
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| not_found(id))?;
        *existing = book.clone().with_id(id);
        Ok(existing.clone())
    }

    async fn delete_book(&self, id: BookId) -> Result<(), ApiError> {
        let mut state = self.begin()?;
        let before = state.books.len();
        state.books.retain(|book| book.id != id);
        if state.books.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete_all_books(&self) -> Result<(), ApiError> {
        let mut state = self.begin()?;
        state.books.clear();
        Ok(())
    }
}
