//! HTML parser for extracting the page title and anchor links
//!
//! Parsing is permissive: malformed markup yields a degraded result (no
//! title, fewer links) rather than an error.

use super::{PageSummary, NO_TITLE};
use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// The page title (from the first <title> tag)
    pub title: Option<String>,

    /// Raw href values of every anchor carrying an href attribute
    pub links: Vec<String>,
}

impl ParsedPage {
    /// Combines the parsed content with a status code, applying the title fallback
    pub fn into_summary(self, status_code: u16) -> PageSummary {
        PageSummary {
            title: self.title.unwrap_or_else(|| NO_TITLE.to_string()),
            links: self.links,
            status_code,
        }
    }
}

/// Parses HTML content and extracts the title and links
///
/// # Link Extraction Rules
///
/// - Every `<a>` element carrying an `href` attribute, in document order
/// - An empty `href=""` is still a link and is reported as `""`
/// - Values are kept verbatim: no resolution, no scheme filtering
/// - Duplicates are preserved
///
/// # Example
///
/// ```
/// use page_fetcher::parse_page;
///
/// let html = r#"<html><head><title> Test </title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_page(html);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.links, vec!["/page".to_string()]);
/// ```
pub fn parse_page(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        links: extract_links(&document),
    }
}

/// Extracts the trimmed text of the first <title> element
///
/// An empty `<title></title>` yields `Some("")`, not `None`.
pub fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Extracts the href of every anchor element, in document order
pub fn extract_links(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
