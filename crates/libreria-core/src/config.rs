//! Endpoint Configuration
//!
//! Base URL of the books collection and per-record URL building.

use crate::book::BookId;

/// Collection endpoint used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/libri";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    collection_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    /// Trailing slashes are dropped; a blank URL falls back to the default
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            collection_url: trimmed.to_string(),
        }
    }

    pub fn from_option(url: Option<&str>) -> Self {
        url.map(Self::new).unwrap_or_default()
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    pub fn book_url(&self, id: BookId) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}
