//! Character encoding detection and transcoding of fetched pages.
//!
//! The charset is taken from the HTTP `Content-Type` header first, then from
//! a `<meta>` declaration near the top of the document. Anything else is
//! decoded as UTF-8. Decoding is lossy: invalid sequences become U+FFFD.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Number of leading bytes searched for a `<meta>` charset declaration.
const META_SNIFF_LEN: usize = 1024;

/// Pick the encoding for a response body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(enc) = content_type
        .and_then(|ct| capture(&CONTENT_TYPE_CHARSET, ct))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return enc;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(META_SNIFF_LEN)]);
    capture(&CHARSET_META, &head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use protein_scrape::encoding::decode_body;
///
/// let page = decode_body(b"<p>Caf\xE9</p>", Some("text/html; charset=latin1"));
/// assert_eq!(page, "<p>Café</p>");
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

fn capture(re: &regex::Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
