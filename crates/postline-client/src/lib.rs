//! Postline Client - HTTP access to the content API.
//!
//! This crate provides:
//!
//! - [`prismic`] - the document-search client and raw-response projection
//! - [`session`] - the listing session that accumulates fetched pages
//!
//! # Overview
//!
//! The client handles request building, response parsing, and error mapping;
//! the session drives sequential load-more calls over one listing state.

pub mod prismic;
pub mod session;

// Re-export main types
pub use prismic::PrismicClient;
pub use session::ListingSession;
