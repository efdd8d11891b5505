//! Log sink setup.
//!
//! Lines look like `2026-10-16 09:30:01,512 protein Ubiquitin`: a local
//! timestamp and the message, no level or target. They are appended to the
//! configured file and, unless quiet, echoed to standard output.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

use crate::{Error, LogConfig, Result};

/// Timestamp layout of each log line.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Maximum level for a configuration: DEBUG when verbose, INFO otherwise.
#[must_use]
pub fn max_level(config: &LogConfig) -> Level {
    if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Build the writer for a configuration: the log file, plus stdout when
/// echoing.
///
/// # Errors
///
/// Returns `Error::Logging` when the log file cannot be opened for append.
pub fn make_writer(config: &LogConfig) -> Result<BoxMakeWriter> {
    let file = open_log_file(config)?;
    let file = Mutex::new(file);
    Ok(if config.echo_stdout {
        BoxMakeWriter::new(file.and(std::io::stdout))
    } else {
        BoxMakeWriter::new(file)
    })
}

/// Build the subscriber for a configuration without installing it.
///
/// # Errors
///
/// Returns `Error::Logging` when the log file cannot be opened.
pub fn subscriber(config: &LogConfig) -> Result<impl Subscriber + Send + Sync + 'static> {
    Ok(tracing_subscriber::fmt()
        .with_writer(make_writer(config)?)
        .with_max_level(max_level(config))
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .finish())
}

/// Install the global subscriber for a configuration.
///
/// # Errors
///
/// Returns `Error::Logging` when the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(config)?)
        .map_err(|e| Error::Logging(e.to_string()))
}

fn open_log_file(config: &LogConfig) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|e| Error::Logging(format!("{}: {e}", config.file.display())))
}
