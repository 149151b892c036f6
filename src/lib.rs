//! Page-Fetcher: a single-shot web page fetcher
//!
//! This crate fetches one URL, parses the returned HTML, and reports the page
//! title, every anchor link, and the HTTP status code.

pub mod fetcher;
pub mod output;

use thiserror::Error;

/// Error produced when a fetch fails at the transport layer
///
/// Covers connection failures, DNS failures, timeouts, malformed URLs and
/// non-success HTTP statuses. Malformed HTML is never an error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Outcome of a single fetch: either a page summary or a transport error
pub type FetchOutcome = std::result::Result<PageSummary, FetchError>;

// Re-export commonly used types
pub use fetcher::{build_http_client, fetch, fetch_with, parse_page, PageSummary, ParsedPage};
