//! Body decoding for fetched pages
//!
//! The charset is taken from the Content-Type header when it declares one,
//! otherwise from a `<meta>` tag near the top of the document, otherwise
//! UTF-8. A byte order mark overrides all of these.

use encoding_rs::{Encoding, UTF_8};

/// How far into the body to look for a `<meta>` charset declaration
const META_SCAN_LIMIT: usize = 1024;

/// Decodes a response body to text using its declared or sniffed charset
///
/// Invalid sequences are replaced with U+FFFD; decoding never fails.
///
/// # Example
///
/// ```
/// use page_fetcher::fetcher::decode_body;
///
/// let body = b"<title>Caf\xE9</title>";
/// let text = decode_body(body, Some("text/html; charset=iso-8859-1"));
/// assert_eq!(text, "<title>Café</title>");
/// ```
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| sniff_meta_charset(body))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!("Body contained invalid {} sequences", used.name());
    }

    text.into_owned()
}

/// Looks for a charset declared in a `<meta>` tag at the start of the document
fn sniff_meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SCAN_LIMIT)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    head.match_indices("<meta").find_map(|(start, _)| {
        let tag = &head[start..];
        let tag = tag.find('>').map_or(tag, |end| &tag[..end]);
        charset_label(tag).and_then(|label| Encoding::for_label(label.as_bytes()))
    })
}

/// Extracts the value of a `charset=` parameter, ignoring case and quotes
fn charset_label(text: &str) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    let start = lower.find("charset")? + "charset".len();

    let rest = lower[start..].trim_start().strip_prefix('=')?.trim_start();
    let rest = rest.trim_start_matches(|c: char| c == '"' || c == '\'');

    let label: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        .collect();

    (!label.is_empty()).then_some(label)
}
