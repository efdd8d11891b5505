//! # protein-scrape
//!
//! Extracts one structured profile record from a protein page.
//!
//! The page layout is not under our control and has changed several times,
//! so the profile is found by trying a table of known layouts in order, and
//! each field is looked up through an ordered list of fallbacks (label text,
//! element id, data attribute). Free-text values are then normalized into
//! integers where that makes sense (height in inches, weight, birth date).
//!
//! ## Quick Start
//!
//! ```rust
//! use protein_scrape::{scrape_document, Options};
//!
//! let html = r#"<html><body><div id="info_box">
//!     <p><span>Ubiquitin</span></p>
//!     <p><span>Position:</span> Cytoplasm <span>MWeight:</span> 8565 Da</p>
//! </div></body></html>"#;
//!
//! let record = scrape_document(html, &Options::default())?;
//! assert_eq!(record.name, "Ubiquitin");
//! assert_eq!(record.position, "Cytoplasm");
//! assert_eq!(record.int_weight, 8565);
//! assert_eq!(record.college, "Unknown");
//! # Ok::<(), protein_scrape::Error>(())
//! ```

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Text/tail accessors for element nodes.
pub mod etree;

/// Layout table and locator.
pub mod selector;

/// Field lookup, text cleanup and normalization.
pub mod extractor;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page retrieval over HTTP.
pub mod fetch;

/// Log sink setup.
pub mod logging;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{LogConfig, Options, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS};
pub use result::{ProfileRecord, UNKNOWN};

/// Scrapes a profile from an HTML document that has already been fetched.
///
/// `options.url` is only used in log lines and in the error message.
///
/// # Errors
///
/// Returns `Error::UnsupportedLayout` when none of the known page layouts
/// matches the document.
pub fn scrape_document(html: &str, options: &Options) -> Result<ProfileRecord> {
    extract::scrape_document(html, options)
}

/// Fetches `options.url` and scrapes the profile from it.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` when `options.url` is missing or not an
/// absolute http(s) URL, `Error::Transport` when the page cannot be
/// fetched, and `Error::UnsupportedLayout` when no known layout matches.
pub fn scrape_url(options: &Options) -> Result<ProfileRecord> {
    extract::scrape_url(options)
}
