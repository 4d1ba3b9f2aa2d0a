//! Form Drafts
//!
//! Text buffers behind the create/edit form and their validation.

use crate::book::{Book, BookField, NewBook};
use crate::error::DraftError;

/// Raw form contents, every field kept as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
}

impl BookDraft {
    /// Snapshot a record into an edit buffer
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            genre: book.genre.clone(),
        }
    }

    pub fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Year => &self.year,
            BookField::Genre => &self.genre,
        }
    }

    pub fn set(&mut self, field: BookField, value: String) {
        match field {
            BookField::Title => self.title = value,
            BookField::Author => self.author = value,
            BookField::Year => self.year = value,
            BookField::Genre => self.genre = value,
        }
    }

    /// Check all four fields and build the write payload.
    ///
    /// Text fields are trimmed; a field that is empty after trimming is missing.
    pub fn validate(&self) -> Result<NewBook, DraftError> {
        for field in BookField::ALL {
            if self.field(field).trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| DraftError::InvalidYear(self.year.clone()))?;

        Ok(NewBook {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            year,
            genre: self.genre.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookDraft {
        BookDraft {
            title: "  Il barone rampante ".to_string(),
            author: "Calvino".to_string(),
            year: "1957".to_string(),
            genre: "Romanzo".to_string(),
        }
    }

    #[test]
    fn test_validate_trims_and_parses() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.title, "Il barone rampante");
        assert_eq!(payload.year, 1957);
    }

    #[test]
    fn test_each_field_is_required() {
        for field in BookField::ALL {
            let mut draft = filled();
            draft.set(field, "   ".to_string());
            assert_eq!(draft.validate(), Err(DraftError::MissingField(field)));
        }
    }

    #[test]
    fn test_year_must_be_integer() {
        let mut draft = filled();
        draft.year = "millenovecento".to_string();
        assert_eq!(
            draft.validate(),
            Err(DraftError::InvalidYear("millenovecento".to_string()))
        );
    }

    #[test]
    fn test_from_book_snapshots_fields() {
        let book = filled().validate().unwrap().with_id(4);
        let draft = BookDraft::from_book(&book);
        assert_eq!(draft.field(BookField::Year), "1957");
        assert_eq!(draft.field(BookField::Author), "Calvino");
    }
}
