//! Filter and Sort
//!
//! Local, synchronous transforms over the in-memory book list.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::book::Book;

/// Sort order for the list view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep server order
    #[default]
    None,
    Title,
    Year,
}

impl SortKey {
    /// Value used by the sort `<select>`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::Title => "titolo",
            SortKey::Year => "anno",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "titolo" => SortKey::Title,
            "anno" => SortKey::Year,
            _ => SortKey::None,
        }
    }
}

/// Filter bar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    /// Case-insensitive substring of the author
    pub author: String,
    /// Case-insensitive substring of the title
    pub title: String,
    /// Exact genre, `None` = all genres
    pub genre: Option<String>,
    pub sort: SortKey,
}

impl BookQuery {
    pub fn set_genre(&mut self, value: String) {
        self.genre = if value.is_empty() { None } else { Some(value) };
    }

    /// Clear all filters and the sort order
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn matches_lowered(&self, book: &Book, author: &str, title: &str) -> bool {
        contains_ignore_case(&book.author, author)
            && contains_ignore_case(&book.title, title)
            && self.genre.as_ref().map_or(true, |genre| &book.genre == genre)
    }

    /// Filter then sort. Sorting is stable, so equal keys keep server order.
    pub fn apply(&self, books: &[Book]) -> Vec<Book> {
        let author = self.author.to_lowercase();
        let title = self.title.to_lowercase();
        let mut visible: Vec<Book> = books
            .iter()
            .filter(|book| self.matches_lowered(book, &author, &title))
            .cloned()
            .collect();

        match self.sort {
            SortKey::None => {}
            SortKey::Title => visible.sort_by(|a, b| compare_titles(&a.title, &b.title)),
            SortKey::Year => visible.sort_by_key(|book| book.year),
        }
        visible
    }
}

/// Distinct genres present in the list, sorted
pub fn genres(books: &[Book]) -> Vec<String> {
    books
        .iter()
        .map(|book| book.genre.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || haystack.to_lowercase().contains(lowered_needle)
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookId;

    fn book(id: BookId, title: &str, author: &str, year: i32, genre: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "Guerra e pace", "Lev Tolstoj", 1869, "Romanzo"),
            book(2, "il deserto dei Tartari", "Buzzati", 1940, "Romanzo"),
            book(3, "Anna Karenina", "TOLSTOJ", 1877, "Romanzo"),
            book(4, "Lezioni americane", "Calvino", 1988, "Saggio"),
            book(5, "Il Nome della Rosa", "Eco", 1980, "Romanzo"),
        ]
    }

    #[test]
    fn test_author_filter_is_case_insensitive_substring() {
        let query = BookQuery { author: "tol".to_string(), ..Default::default() };
        let visible = query.apply(&shelf());

        assert_eq!(visible.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(visible.iter().all(|b| b.author.to_lowercase().contains("tol")));
    }

    #[test]
    fn test_title_and_author_filters_combine() {
        let query = BookQuery {
            author: "tolstoj".to_string(),
            title: "ANNA".to_string(),
            ..Default::default()
        };
        let visible = query.apply(&shelf());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }

    #[test]
    fn test_genre_is_exact_match() {
        let books = vec![book(1, "Il Nome della Rosa", "Eco", 1980, "Romanzo")];

        let mut query = BookQuery::default();
        query.set_genre("Romanzo".to_string());
        assert_eq!(query.apply(&books).len(), 1);

        query.set_genre("Saggio".to_string());
        assert!(query.apply(&books).is_empty());

        query.set_genre("romanzo".to_string());
        assert!(query.apply(&books).is_empty());

        query.set_genre(String::new());
        assert_eq!(query.genre, None);
        assert_eq!(query.apply(&books).len(), 1);
    }

    #[test]
    fn test_sort_by_year_is_non_decreasing() {
        let query = BookQuery { sort: SortKey::Year, ..Default::default() };
        let years: Vec<i32> = query.apply(&shelf()).iter().map(|b| b.year).collect();
        assert!(years.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(years.len(), 5);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let query = BookQuery { sort: SortKey::Title, ..Default::default() };
        let titles: Vec<String> = query.apply(&shelf()).into_iter().map(|b| b.title).collect();
        assert_eq!(
            titles,
            vec![
                "Anna Karenina",
                "Guerra e pace",
                "il deserto dei Tartari",
                "Il Nome della Rosa",
                "Lezioni americane",
            ]
        );
    }

    #[test]
    fn test_no_sort_keeps_server_order() {
        let ids: Vec<BookId> = BookQuery::default().apply(&shelf()).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut query = BookQuery {
            author: "eco".to_string(),
            title: "rosa".to_string(),
            genre: Some("Romanzo".to_string()),
            sort: SortKey::Year,
        };
        query.reset();
        assert_eq!(query, BookQuery::default());
    }

    #[test]
    fn test_genres_are_distinct_and_sorted() {
        assert_eq!(genres(&shelf()), vec!["Romanzo", "Saggio"]);
        assert!(genres(&[]).is_empty());
    }

    #[test]
    fn test_sort_key_select_values() {
        for key in [SortKey::None, SortKey::Title, SortKey::Year] {
            assert_eq!(SortKey::from_value(key.as_str()), key);
        }
        assert_eq!(SortKey::from_value("autore"), SortKey::None);
    }
}
