//! Compiled regex patterns used by the normalizer.
//!
//! All patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Every maximal run of ASCII digits (height and birth date groups).
pub static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("DIGIT_RUN regex"));

/// A digit run anchored at the start of the value (weight).
pub static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("LEADING_DIGITS regex"));

/// Matches `<meta charset="...">` in the head of a document.
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET_META regex")
});

/// Matches the `charset=` parameter of a Content-Type value.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("CONTENT_TYPE_CHARSET regex")
});
