//! Configuration for a scrape run.
//!
//! `Options` carries everything the pipeline needs, including the log sink
//! description. Nothing here is process-global: the binary builds an
//! `Options` from its arguments and hands it down.

use std::path::PathBuf;

/// Default log file, appended to on every run.
pub const DEFAULT_LOG_FILE: &str = "protein_page.log";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how verbosely log lines are written.
///
/// # Example
///
/// ```rust
/// use protein_scrape::LogConfig;
///
/// let quiet = LogConfig {
///     echo_stdout: false,
///     ..LogConfig::default()
/// };
/// assert!(!quiet.verbose);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file to append to.
    ///
    /// Default: `protein_page.log`
    pub file: PathBuf,

    /// Echo every log line to standard output as well.
    ///
    /// Default: `true` (turned off by `-q`)
    pub echo_stdout: bool,

    /// Emit DEBUG lines in addition to INFO.
    ///
    /// Default: `false` (turned on by `-v`)
    pub verbose: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            echo_stdout: true,
            verbose: false,
        }
    }
}

/// Configuration options for a scrape run.
///
/// All fields are public. Use `Default::default()` for standard settings.
///
/// # Example
///
/// ```rust
/// use protein_scrape::Options;
///
/// let options = Options {
///     url: Some("https://example.com/protein/1".to_string()),
///     json: true,
///     ..Options::default()
/// };
/// assert!(options.log.echo_stdout);
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Page to scrape. Used for fetching and for error messages.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Log sink configuration.
    pub log: LogConfig,

    /// Force INSERT into the database. There is no database; accepted and
    /// reported only.
    ///
    /// Default: `false`
    pub force_insert: bool,

    /// Force DELETE from the database. Accepted and reported only.
    ///
    /// Default: `false`
    pub force_delete: bool,

    /// Print the resolved record as JSON on standard output.
    ///
    /// Default: `false`
    pub json: bool,

    /// User-Agent header sent with the page request.
    pub user_agent: String,

    /// HTTP timeout in seconds.
    ///
    /// Default: 30
    pub timeout_secs: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            log: LogConfig::default(),
            force_insert: false,
            force_delete: false,
            json: false,
            user_agent: concat!("protein-scrape/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Options {
    /// URL used in log lines and error messages, empty when none was given.
    #[must_use]
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}
