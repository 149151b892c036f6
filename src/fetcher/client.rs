//! HTTP client for the page fetcher
//!
//! This module handles the single GET request behind every fetch:
//! - Building an HTTP client with library defaults
//! - Sending the request and checking the status
//! - Reading and decoding the body, then handing it to the parser
//!
//! No headers, timeouts or redirect limits are overridden. Whatever reqwest
//! applies by default is what the caller gets.

use super::decode::decode_body;
use super::parser::parse_page;
use crate::FetchOutcome;
use reqwest::Client;

/// Builds an HTTP client with default configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client (e.g. TLS backend unavailable)
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

/// Fetches a URL and summarises the returned page
///
/// A fresh client is built for every call, so no connection is reused between
/// fetches.
///
/// # Arguments
///
/// * `url` - The URL to fetch; not validated before dispatch
///
/// # Returns
///
/// * `Ok(PageSummary)` - Title, links and status code of the page
/// * `Err(FetchError)` - The request failed or returned a non-success status
///
/// # Example
///
/// ```no_run
/// # async fn demo() {
/// match page_fetcher::fetch("https://example.com/").await {
///     Ok(page) => println!("{} ({} links)", page.title, page.links.len()),
///     Err(e) => println!("{}", e),
/// }
/// # }
/// ```
pub async fn fetch(url: &str) -> FetchOutcome {
    let client = build_http_client()?;
    fetch_with(&client, url).await
}

/// Fetches a URL using the given client
///
/// # Request Flow
///
/// 1. Send a GET request (redirects followed per client policy)
/// 2. Fail on any non-2xx status
/// 3. Read the body bytes and decode them with the declared or sniffed charset
/// 4. Parse the HTML and extract title and links
///
/// There is no retry. Every error on the way is reported as a single
/// [`FetchError`](crate::FetchError).
pub async fn fetch_with(client: &Client, url: &str) -> FetchOutcome {
    tracing::debug!("Sending GET request to {}", url);

    let outcome = get_page(client, url).await;

    match &outcome {
        Ok(page) => tracing::info!(
            "Fetched {} (status {}, {} links)",
            url,
            page.status_code,
            page.links.len()
        ),
        Err(e) => tracing::warn!("Fetch of {} failed: {}", url, e),
    }

    outcome
}

async fn get_page(client: &Client, url: &str) -> FetchOutcome {
    let response = client.get(url).send().await?.error_for_status()?;
    let status_code = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.bytes().await?;
    tracing::trace!("Received {} bytes from {}", body.len(), url);

    let html = decode_body(&body, content_type.as_deref());
    Ok(parse_page(&html).into_summary(status_code))
}
