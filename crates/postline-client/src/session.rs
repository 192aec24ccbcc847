//! Listing session: one synchronizer instance per page view.

use postline_core::config::ListingQuery;
use postline_core::error::AppError;
use postline_core::listing::ListingState;
use postline_core::models::{ListingPage, PostSummary};
use tracing::{debug, info};

use crate::prismic::PrismicClient;

/// Applies a fetch result to the listing state.
///
/// The state is only touched when the fetch succeeded; any failure leaves it
/// exactly as it was, so a failed load has no partial effect.
fn apply_fetch(
    state: &mut ListingState,
    fetched: Result<ListingPage, AppError>,
) -> Result<usize, AppError> {
    Ok(state.advance(fetched?))
}

/// Owns the accumulated listing and drives load-more fetches against the
/// content API.
///
/// `load_next` takes `&mut self`, so at most one load can be in flight per
/// session; the one-at-a-time contract the UI used to be responsible for is
/// enforced by the borrow checker here.
pub struct ListingSession {
    client: PrismicClient,
    state: ListingState,
}

impl ListingSession {
    /// Opens a session by fetching the first page for `query`.
    pub async fn open(client: PrismicClient, query: &ListingQuery) -> Result<Self, AppError> {
        let page = client.query_documents(query).await?;
        if let Some(total) = page.total {
            info!(total, fetched = page.entries.len(), "opened listing session");
        }
        Ok(Self {
            client,
            state: ListingState::new(page.entries, page.next_cursor),
        })
    }

    /// Resumes a session from an already-rendered first page, e.g. one the
    /// server delivered with the host page.
    pub fn resume(
        client: PrismicClient,
        entries: Vec<PostSummary>,
        next_cursor: Option<String>,
    ) -> Self {
        Self {
            client,
            state: ListingState::new(entries, next_cursor),
        }
    }

    /// The accumulated entries, in display order.
    pub fn entries(&self) -> &[PostSummary] {
        self.state.entries()
    }

    /// Whether the load-more control should be visible.
    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Loads the next page and appends its entries.
    ///
    /// Silent no-op returning 0 when the cursor is already absent: no fetch
    /// is issued and the state stays unchanged. Otherwise exactly one fetch
    /// goes out to the cursor target; on failure the error is returned and
    /// the state is left untouched.
    pub async fn load_next(&mut self) -> Result<usize, AppError> {
        let Some(cursor) = self.state.next_cursor().map(str::to_owned) else {
            debug!("load_next with no pending cursor; nothing to do");
            return Ok(0);
        };

        let fetched = self.client.follow_cursor(&cursor).await;
        apply_fetch(&mut self.state, fetched)
    }
}
