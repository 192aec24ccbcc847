//! Domain models shared across the workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A read-only snapshot of one published (or draft) content entry.
///
/// This is the narrowed form kept after projection: exactly the fields the
/// listing renders, nothing the upstream service tacks on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Opaque unique identifier, used for routing and keying. Never reused.
    pub id: String,
    /// When the entry was first published. `None` means the entry is an
    /// unpublished draft and must not be passed to the date formatter.
    pub first_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// One batch of entries plus the cursor for the subsequent batch.
///
/// Transient fetch result, never persisted. The cursor is opaque and must be
/// treated as an uninterpreted string; `None` signals no further pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub next_cursor: Option<String>,
    /// Entries in upstream relevance order. Insertion order is display
    /// order; nothing re-sorts locally.
    pub entries: Vec<PostSummary>,
    /// Total number of matching entries the upstream reports, when it does.
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_post_summary_serializes_five_fields() {
        let post = PostSummary {
            id: "como-utilizar-hooks".to_string(),
            first_publication_date: Some(Utc.with_ymd_and_hms(2021, 3, 15, 19, 25, 28).unwrap()),
            title: "Como utilizar Hooks".to_string(),
            subtitle: "Pensando em sincronização em vez de ciclos de vida".to_string(),
            author: "Joseph Oliveira".to_string(),
        };

        let value = serde_json::to_value(&post).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("first_publication_date"));
        assert!(object.contains_key("title"));
        assert!(object.contains_key("subtitle"));
        assert!(object.contains_key("author"));
    }

    #[test]
    fn test_post_summary_deserializes_null_date() {
        let json = r#"{
            "id": "draft-post",
            "first_publication_date": null,
            "title": "Rascunho",
            "subtitle": "Ainda em edição",
            "author": "Danilo Vieira"
        }"#;

        let post: PostSummary = serde_json::from_str(json).unwrap();
        assert!(post.first_publication_date.is_none());
    }
}
