//! Catalog Session State
//!
//! The UI's transient copy of the book list plus the form buffers.
//! The backend is authoritative: every mutation here follows a
//! successful response and mirrors what the server returned.

use crate::book::{Book, BookField, BookId, NewBook};
use crate::draft::BookDraft;
use crate::error::DraftError;
use crate::query;

/// Edit buffer for one existing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: BookId,
    pub draft: BookDraft,
}

/// What a form submission turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewBook),
    Update(BookId, NewBook),
}

/// Result of a successful round trip, ready to apply to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded(Vec<Book>),
    Created(Book),
    Updated(Book),
    Deleted(BookId),
    Cleared,
}

/// In-memory session state of the catalog UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    loading: bool,
    draft: BookDraft,
    editing: Option<EditSession>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The create form buffer (kept aside while editing)
    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Buffer the form currently shows: the edit buffer in edit mode, else the create draft
    pub fn form(&self) -> &BookDraft {
        match &self.editing {
            Some(session) => &session.draft,
            None => &self.draft,
        }
    }

    pub fn set_field(&mut self, field: BookField, value: String) {
        match &mut self.editing {
            Some(session) => session.draft.set(field, value),
            None => self.draft.set(field, value),
        }
    }

    pub fn genres(&self) -> Vec<String> {
        query::genres(&self.books)
    }

    // ========================
    // Loading
    // ========================

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Loading ended without data; the list stays as it was
    pub fn loading_failed(&mut self) {
        self.loading = false;
    }

    // ========================
    // Editing
    // ========================

    /// Snapshot a listed record into the edit buffer.
    ///
    /// Returns `false` if no record with that id is listed.
    pub fn begin_edit(&mut self, id: BookId) -> bool {
        match self.books.iter().find(|book| book.id == id) {
            Some(book) => {
                self.editing = Some(EditSession {
                    id,
                    draft: BookDraft::from_book(book),
                });
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validate the visible form and describe the request to send
    pub fn submission(&self) -> Result<Submission, DraftError> {
        match &self.editing {
            Some(session) => Ok(Submission::Update(session.id, session.draft.validate()?)),
            None => Ok(Submission::Create(self.draft.validate()?)),
        }
    }

    // ========================
    // Reconciliation
    // ========================

    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loaded(books) => self.books_loaded(books),
            Outcome::Created(book) => self.book_created(book),
            Outcome::Updated(book) => self.book_updated(book),
            Outcome::Deleted(id) => self.book_deleted(id),
            Outcome::Cleared => self.library_cleared(),
        }
    }

    /// Replace the list with the server's
    pub fn books_loaded(&mut self, books: Vec<Book>) {
        self.books = books;
        self.loading = false;
    }

    /// Prepend the created record and clear the create form
    pub fn book_created(&mut self, book: Book) {
        self.books.retain(|existing| existing.id != book.id);
        self.books.insert(0, book);
        self.draft = BookDraft::default();
    }

    /// Replace the record with the same id and leave edit mode
    pub fn book_updated(&mut self, book: Book) {
        if self.editing.as_ref().map(|session| session.id) == Some(book.id) {
            self.editing = None;
        }
        if let Some(existing) = self.books.iter_mut().find(|existing| existing.id == book.id) {
            *existing = book;
        }
    }

    pub fn book_deleted(&mut self, id: BookId) {
        self.books.retain(|book| book.id != id);
        if self.editing.as_ref().map(|session| session.id) == Some(id) {
            self.editing = None;
        }
    }

    pub fn library_cleared(&mut self) {
        self.books.clear();
        self.editing = None;
    }
}
