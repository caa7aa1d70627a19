//! Site search.
//!
//! There is no search index: a query containing a known keyword goes straight
//! to the page for it, anything else lands on the news page with the query
//! attached.

use thiserror::Error;

/// Page that receives unmatched queries.
pub const NEWS_PAGE: &str = "berita.html";

/// Shown when the search box is empty.
pub const EMPTY_QUERY_MESSAGE: &str = "Masukkan kata kunci pencarian";

/// Keyword to page, checked in this order.
pub const KEYWORD_PAGES: &[(&str, &str)] = &[
    ("arabika", "arabika.html"),
    ("gayo", "arabika.html"),
    ("aceh", "arabika.html"),
    ("toraja", "arabika.html"),
    ("java", "arabika.html"),
    ("preanger", "arabika.html"),
    ("robusta", "robusta.html"),
    ("lampung", "robusta.html"),
    ("bali", "robusta.html"),
    ("kintamani", "robusta.html"),
    ("kontak", "kontak.html"),
    ("hubungi", "kontak.html"),
    ("contact", "kontak.html"),
    ("galeri", "galeri.html"),
    ("gallery", "galeri.html"),
    ("foto", "galeri.html"),
    ("berita", "berita.html"),
    ("news", "berita.html"),
    ("promo", "berita.html"),
    ("faq", "faq.html"),
    ("bantuan", "faq.html"),
    ("help", "faq.html"),
    ("home", "index.html"),
    ("beranda", "index.html"),
];

/// Search failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Nothing but whitespace was entered.
    #[error("Masukkan kata kunci pencarian")]
    EmptyQuery,
}

/// Where a query leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRoute {
    /// A content page matched by keyword.
    Page(&'static str),
    /// The news page, filtered by the normalized query.
    News { query: String },
}

impl SearchRoute {
    /// The URL to navigate to.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Page(page) => (*page).to_string(),
            Self::News { query } => {
                format!("{NEWS_PAGE}?search={}", urlencoding::encode(query))
            }
        }
    }
}

/// Resolves search box input to a route.
#[derive(Debug, Clone, Copy)]
pub struct Search {
    keywords: &'static [(&'static str, &'static str)],
}

impl Default for Search {
    fn default() -> Self {
        Self {
            keywords: KEYWORD_PAGES,
        }
    }
}

impl Search {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route for raw search box input.
    ///
    /// The input is trimmed and lowercased; the first keyword (in table order)
    /// contained anywhere in it wins.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] if the input is blank.
    pub fn resolve(&self, input: &str) -> Result<SearchRoute, SearchError> {
        let query = input.trim().to_lowercase();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let route = self
            .keywords
            .iter()
            .find(|(keyword, _)| query.contains(keyword))
            .map_or_else(
                || SearchRoute::News {
                    query: query.clone(),
                },
                |(_, page)| SearchRoute::Page(*page),
            );

        tracing::debug!(query = %query, route = ?route, "Search resolved");
        Ok(route)
    }
}
