//! Configuration types for postline components.
//!
//! All values here are process-wide fixed configuration: the listing query
//! and the date format are not negotiated per call site.

use std::time::Duration;

/// HTTP client configuration for content API calls.
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: &'static str,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "postline/0.1 (listing-sync)",
        }
    }
}

/// First-page query configuration: content-type filter, field selection,
/// and page size.
///
/// The page size only applies to the externally-sourced first page;
/// follow-cursor fetches return whatever the cursor target decides.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub content_type: String,
    pub fields: Vec<String>,
    pub page_size: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            content_type: "posts".to_string(),
            fields: vec![
                "posts.title".to_string(),
                "posts.subtitle".to_string(),
                "posts.author".to_string(),
            ],
            page_size: 20,
        }
    }
}

impl ListingQuery {
    /// Returns the query with a different first-page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// The `q` predicate in the content API's query language.
    pub fn predicate(&self) -> String {
        format!("[[at(document.type,\"{}\")]]", self.content_type)
    }

    /// The comma-joined field-selection list.
    pub fn fetch_list(&self) -> String {
        self.fields.join(",")
    }
}
