//! Book Entity
//!
//! The catalog record as exchanged with the `/api/libri` backend.
//! Field names on the wire are Italian (`titolo`, `autore`, `anno`, `genere`).

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Server-assigned identifier, stable once assigned.
///
/// Any non-negative JSON integer up to `u64::MAX` decodes; string ids do not.
pub type BookId = u64;

/// A book record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(rename = "titolo")]
    pub title: String,
    #[serde(rename = "autore")]
    pub author: String,
    #[serde(rename = "anno", deserialize_with = "deserialize_year")]
    pub year: i32,
    #[serde(rename = "genere")]
    pub genre: String,
}

impl Book {
    /// The four editable fields, without the id
    pub fn fields(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            genre: self.genre.clone(),
        }
    }
}

/// Write payload for POST and PUT (a book minus its id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(rename = "titolo")]
    pub title: String,
    #[serde(rename = "autore")]
    pub author: String,
    #[serde(rename = "anno", deserialize_with = "deserialize_year")]
    pub year: i32,
    #[serde(rename = "genere")]
    pub genre: String,
}

impl NewBook {
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre,
        }
    }
}

/// The editable fields of a book, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Year,
    Genre,
}

impl BookField {
    pub const ALL: [BookField; 4] = [
        BookField::Title,
        BookField::Author,
        BookField::Year,
        BookField::Genre,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            BookField::Title => "titolo",
            BookField::Author => "autore",
            BookField::Year => "anno",
            BookField::Genre => "genere",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            BookField::Title => "📖 Titolo",
            BookField::Author => "👤 Autore",
            BookField::Year => "📅 Anno",
            BookField::Genre => "🎭 Genere",
        }
    }

    /// HTML input type used to edit the field
    pub fn input_type(&self) -> &'static str {
        match self {
            BookField::Year => "number",
            _ => "text",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(i32),
    Text(String),
}

/// Accepts `anno` as a JSON integer or as a numeric string
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match YearRepr::deserialize(deserializer)? {
        YearRepr::Number(year) => Ok(year),
        YearRepr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid year: {:?}", text))),
    }
}
