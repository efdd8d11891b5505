//! Scrape one protein page and log the profile.
//!
//! Usage:
//!   protein_page [-f] [-d] [-q] [-v] [--log-file PATH] [--json] <URL>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use protein_scrape::{logging, scrape_url, Error, LogConfig, Options, DEFAULT_LOG_FILE};

#[derive(Parser, Debug)]
#[command(name = "protein_page", version, about = "Scrape a protein page")]
struct Cli {
    /// The protein page URL
    url: String,

    /// Force INSERT protein into database
    #[arg(short = 'f')]
    force_insert: bool,

    /// Force DELETE protein from database
    #[arg(short = 'd')]
    force_delete: bool,

    /// Quiet
    #[arg(short = 'q')]
    quiet: bool,

    /// Verbose
    #[arg(short = 'v')]
    verbose: bool,

    /// Log file, appended to on every run
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Print the record as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_options(self) -> Options {
        Options {
            url: Some(self.url),
            log: LogConfig {
                file: self.log_file,
                echo_stdout: !self.quiet,
                verbose: self.verbose,
            },
            force_insert: self.force_insert,
            force_delete: self.force_delete,
            json: self.json,
            ..Options::default()
        }
    }
}

fn main() -> ExitCode {
    let options = Cli::parse().into_options();

    if let Err(e) = logging::init(&options.log) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match scrape_url(&options) {
        Ok(record) => {
            if options.json {
                match serde_json::to_string_pretty(&record) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e @ Error::UnsupportedLayout { .. }) => {
            println!("{e}");
            ExitCode::FAILURE
        }
        // Already logged where it happened.
        Err(Error::Transport(_) | Error::InvalidUrl(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
