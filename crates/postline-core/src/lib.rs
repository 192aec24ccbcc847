//! Postline Core - Domain types, listing state, date formatting, and errors.

pub mod config;
pub mod date;
pub mod error;
pub mod listing;
pub mod models;

pub use config::{HttpConfig, ListingQuery};
pub use date::{DateFormatConfig, DateFormatter};
pub use error::AppError;
pub use listing::ListingState;
pub use models::{ListingPage, PostSummary};
