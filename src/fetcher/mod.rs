//! Fetcher module for retrieving and summarising a single page
//!
//! This module contains:
//! - HTTP fetching with a default client
//! - Charset-aware decoding of the response body
//! - HTML parsing for the title and anchor links

mod client;
mod decode;
mod parser;

pub use client::{build_http_client, fetch, fetch_with};
pub use decode::decode_body;
pub use parser::{extract_links, extract_title, parse_page, ParsedPage};

use serde::Serialize;

/// Title reported when the document has no `<title>` element
pub const NO_TITLE: &str = "No title found";

/// Summary of a successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Trimmed text of the first `<title>` element, or [`NO_TITLE`]
    pub title: String,

    /// Raw `href` values of every anchor, in document order
    pub links: Vec<String>,

    /// HTTP status code of the response
    pub status_code: u16,
}
