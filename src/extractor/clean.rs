//! Raw field text cleanup.

/// Trim a raw field value.
///
/// Leading space characters (U+0020 only) are removed. Then characters are
/// removed from the end while the last one is not alphanumeric or is
/// whitespace, so trailing punctuation goes together with trailing
/// whitespace.
///
/// Returns `None` when nothing is left, which callers treat as an
/// unresolvable field.
///
/// # Example
///
/// ```rust
/// use protein_scrape::extractor::clean_garbage;
///
/// assert_eq!(clean_garbage(" 6' 1\" ").as_deref(), Some("6' 1"));
/// assert_eq!(clean_garbage(" ... "), None);
/// ```
#[must_use]
pub fn clean_garbage(raw: &str) -> Option<String> {
    let start = raw.trim_start_matches(' ');
    let cleaned = start.trim_end_matches(|c: char| !c.is_alphanumeric() || c.is_whitespace());
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
