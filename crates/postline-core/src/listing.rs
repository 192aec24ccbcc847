//! Listing state and its pure page transition.
//!
//! This module is the decoupled core of the synchronizer: no I/O, no UI.
//! Fetching lives in `postline-client`; this type only knows how to fold a
//! successfully fetched page into the accumulated listing.

use tracing::debug;

use crate::models::{ListingPage, PostSummary};

/// Accumulated listing plus the cursor for the next page.
///
/// Owned exclusively by one synchronizer per page view and mutated only
/// through [`ListingState::advance`]. Invariants:
///
/// - `entries` is append-only; prior entries keep their relative order.
/// - `next_cursor` moves `cursor₀ → cursor₁ → … → None` and never reverts;
///   `None` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    entries: Vec<PostSummary>,
    next_cursor: Option<String>,
}

impl ListingState {
    /// Creates a state from a server-provided first page.
    ///
    /// No validation is performed; the caller guarantees the ordering of
    /// `entries` is final.
    pub fn new(entries: Vec<PostSummary>, next_cursor: Option<String>) -> Self {
        Self {
            entries,
            next_cursor: normalize_cursor(next_cursor),
        }
    }

    /// The accumulated entries, in display order.
    pub fn entries(&self) -> &[PostSummary] {
        &self.entries
    }

    /// The pending cursor, if any.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Whether another page can still be loaded. Drives the visibility of
    /// the load-more control.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Folds a successfully fetched page into the listing and returns how
    /// many entries were appended.
    ///
    /// Terminal no-op when the cursor is already absent: nothing should be
    /// fetching at that point, but a stray page must not reopen pagination.
    /// Entries are appended in received order; nothing is reordered,
    /// removed, or deduplicated (an overlapping upstream page is accepted
    /// as-is).
    pub fn advance(&mut self, page: ListingPage) -> usize {
        if self.next_cursor.is_none() {
            debug!("advance on terminal cursor ignored");
            return 0;
        }

        let appended = page.entries.len();
        self.next_cursor = normalize_cursor(page.next_cursor);
        self.entries.extend(page.entries);
        debug!(
            appended,
            total = self.entries.len(),
            has_more = self.has_more(),
            "listing advanced"
        );
        appended
    }
}

/// Treats an empty cursor string the same as an absent one. The upstream
/// service signals exhaustion with either.
fn normalize_cursor(cursor: Option<String>) -> Option<String> {
    cursor.filter(|c| !c.is_empty())
}
