//! Error types for protein-scrape.
//!
//! Only run-level failures are errors. A field that cannot be resolved is
//! not an error: it becomes `"Unknown"` (or 0 for the derived integers).

/// Error type for a scrape run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page could not be fetched (connection, DNS, TLS, timeout).
    #[error("Error: {0}")]
    Transport(String),

    /// The command-line argument is not an absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// None of the known page layouts matched the document.
    #[error("Unsupported protein structure found at {url}")]
    UnsupportedLayout {
        /// The page that was scraped.
        url: String,
    },

    /// The log sink could not be set up.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_layout_names_the_url() {
        let err = Error::UnsupportedLayout {
            url: "https://example.com/p/42".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported protein structure found at https://example.com/p/42"
        );
    }

    #[test]
    fn transport_error_keeps_cause() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Error: connection refused");
    }
}
