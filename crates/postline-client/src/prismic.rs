use chrono::{DateTime, Utc};
use postline_core::config::{HttpConfig, ListingQuery};
use postline_core::error::AppError;
use postline_core::models::{ListingPage, PostSummary};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Raw document-search response, as the content API returns it.
///
/// The API always answers with the structure:
/// ```json
/// {
///     "next_page": "https://...",
///     "total_results_size": 42,
///     "results": [ ... ]
/// }
/// ```
/// plus assorted metadata fields this client has no use for.
#[derive(Deserialize, Debug)]
struct RawListingPage {
    next_page: Option<String>,
    total_results_size: Option<u64>,
    results: Vec<RawDocument>,
    #[serde(flatten)]
    _extras: serde_json::Map<String, Value>,
}

/// Raw document as returned by the content API.
///
/// Only the fields the listing needs are typed; everything else the API
/// attaches (tags, slugs, language, link metadata) lands in `extras` and is
/// discarded by [`project`]. This is a deliberate narrowing projection, not
/// a passthrough.
#[derive(Deserialize, Debug, Clone)]
pub struct RawDocument {
    /// URL-friendly unique identifier of the document.
    pub uid: String,
    /// When the document was first published; null for drafts.
    pub first_publication_date: Option<DateTime<Utc>>,
    pub data: RawDocumentData,
    /// All other fields returned by the API.
    #[serde(flatten)]
    pub extras: serde_json::Map<String, Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawDocumentData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    #[serde(flatten)]
    pub extras: serde_json::Map<String, Value>,
}

/// Projects a raw document into the listing's summary model.
///
/// Field-for-field copy of the five listing fields; `extras` on both levels
/// are dropped here.
pub fn project(document: RawDocument) -> PostSummary {
    PostSummary {
        id: document.uid,
        first_publication_date: document.first_publication_date,
        title: document.data.title,
        subtitle: document.data.subtitle,
        author: document.data.author,
    }
}

/// Parses a response body into a [`ListingPage`], projecting every entry.
fn parse_listing_page(body: &str) -> Result<ListingPage, AppError> {
    let raw: RawListingPage = serde_json::from_str(body)?;
    Ok(ListingPage {
        next_cursor: raw.next_page,
        entries: raw.results.into_iter().map(project).collect(),
        total: raw.total_results_size,
    })
}

/// HTTP client for the hosted content API.
///
/// Speaks the Prismic-style document-search protocol: a predicate query for
/// the first page, then opaque cursor URLs for every subsequent page.
///
/// # Examples
///
/// ```no_run
/// use postline_client::PrismicClient;
/// use postline_core::ListingQuery;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PrismicClient::new("https://my-blog.cdn.example.com/api/v2")?;
/// let page = client.query_documents(&ListingQuery::default()).await?;
/// println!("Fetched {} posts", page.entries.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PrismicClient {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl PrismicClient {
    /// Creates a client for the given API base URL with default HTTP
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidUrl` if the URL is malformed.
    /// Returns `AppError::Generic` if the HTTP client cannot be built.
    pub fn new(base_url_str: &str) -> Result<Self, AppError> {
        Self::with_config(base_url_str, &HttpConfig::default())
    }

    /// Creates a client with explicit HTTP configuration.
    pub fn with_config(base_url_str: &str, config: &HttpConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url_str)
            .map_err(|_| AppError::InvalidUrl(base_url_str.to_string()))?;

        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Generic(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_secs: config.timeout.as_secs(),
        })
    }

    /// Fetches the first listing page for the given query.
    ///
    /// Issues the document-search request with the content-type predicate,
    /// field-selection list, and page size from `query`.
    pub async fn query_documents(&self, query: &ListingQuery) -> Result<ListingPage, AppError> {
        let mut url = Url::parse(&format!(
            "{}/documents/search",
            self.base_url.as_str().trim_end_matches('/')
        ))
        .map_err(|e| AppError::InvalidUrl(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("q", &query.predicate())
            .append_pair("fetch", &query.fetch_list())
            .append_pair("pageSize", &query.page_size.to_string());

        debug!(%url, "querying first listing page");
        self.get_page(url).await
    }

    /// Follows an opaque cursor to the next listing page.
    ///
    /// The cursor is a complete URL handed back by the previous page; it is
    /// fetched verbatim, with no locally controlled page size.
    pub async fn follow_cursor(&self, cursor: &str) -> Result<ListingPage, AppError> {
        let url = Url::parse(cursor).map_err(|_| AppError::InvalidUrl(cursor.to_string()))?;

        debug!(%url, "following listing cursor");
        self.get_page(url).await
    }

    /// Makes one HTTP GET request and parses the body as a listing page.
    ///
    /// Exactly one request per call: failures are terminal here, never
    /// retried.
    async fn get_page(&self, url: Url) -> Result<ListingPage, AppError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::FetchFailure {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AppError::NetworkError(e.to_string()))?;

        parse_listing_page(&body)
    }

    fn classify_transport_error(&self, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::Timeout(self.timeout_secs)
        } else if err.is_connect() {
            AppError::NetworkError(format!("Connection failed: {}", err))
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_BODY: &str = r#"{
        "page": 1,
        "results_per_page": 20,
        "total_results_size": 3,
        "next_page": "https://blog.example.com/api/v2/documents/search?page=2",
        "results": [
            {
                "id": "YBv8ahEAACUAhIvN",
                "uid": "como-utilizar-hooks",
                "type": "posts",
                "tags": [],
                "lang": "pt-br",
                "first_publication_date": "2021-03-15T19:25:28+00:00",
                "data": {
                    "title": "Como utilizar Hooks",
                    "subtitle": "Pensando em sincronização em vez de ciclos de vida",
                    "author": "Joseph Oliveira",
                    "banner": { "url": "https://images.example.com/hooks.png" }
                }
            }
        ]
    }"#;

    #[test]
    fn test_new_with_valid_url() {
        let result = PrismicClient::new("https://my-blog.cdn.example.com/api/v2");
        assert!(result.is_ok());
    }

    #[test]
    fn test_new_with_invalid_url() {
        let result = PrismicClient::new("not-a-valid-url");
        assert!(result.is_err());

        if let Err(AppError::InvalidUrl(url)) = result {
            assert_eq!(url, "not-a-valid-url");
        } else {
            panic!("Expected AppError::InvalidUrl");
        }
    }

    #[test]
    fn test_parse_listing_page() {
        let page = parse_listing_page(PAGE_BODY).unwrap();
        assert_eq!(page.total, Some(3));
        assert_eq!(
            page.next_cursor.as_deref(),
            Some("https://blog.example.com/api/v2/documents/search?page=2")
        );
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].id, "como-utilizar-hooks");
        assert_eq!(page.entries[0].author, "Joseph Oliveira");
    }

    #[test]
    fn test_projection_discards_extra_fields() {
        let page = parse_listing_page(PAGE_BODY).unwrap();
        let projected = serde_json::to_value(&page.entries[0]).unwrap();
        let object = projected.as_object().unwrap();

        // Exactly the five listing fields survive the projection.
        assert_eq!(object.len(), 5);
        assert!(!object.contains_key("type"));
        assert!(!object.contains_key("tags"));
        assert!(!object.contains_key("lang"));
        assert!(!object.contains_key("banner"));
    }

    #[test]
    fn test_raw_document_captures_extras() {
        let raw: RawListingPage = serde_json::from_str(PAGE_BODY).unwrap();
        assert!(raw.results[0].extras.contains_key("tags"));
        assert!(raw.results[0].data.extras.contains_key("banner"));
    }

    #[test]
    fn test_parse_null_publication_date() {
        let body = r#"{
            "next_page": null,
            "results": [
                {
                    "uid": "rascunho",
                    "first_publication_date": null,
                    "data": { "title": "t", "subtitle": "s", "author": "a" }
                }
            ]
        }"#;

        let page = parse_listing_page(body).unwrap();
        assert!(page.next_cursor.is_none());
        assert!(page.entries[0].first_publication_date.is_none());
    }

    #[test]
    fn test_parse_malformed_body() {
        let result = parse_listing_page("<html>Bad Gateway</html>");
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_missing_results() {
        let result = parse_listing_page(r#"{ "next_page": null }"#);
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }
}
