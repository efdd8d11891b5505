//! Page retrieval.
//!
//! One blocking GET per run. Transport failures abort the run; HTTP error
//! statuses do not, since the returned page is still handed to the layout
//! locator, which rejects it if it is not a profile page.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error};
use url::Url;

use crate::encoding;
use crate::{Error, Options, Result};

/// Validate the page URL: absolute, `http` or `https`, with a host.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` for anything else, after logging it.
pub fn parse_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| invalid_url(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid_url(raw.to_string()));
    }
    Ok(url)
}

/// Fetch a page and decode it to UTF-8.
///
/// # Errors
///
/// Returns `Error::Transport` when the client cannot be built, the request
/// cannot be completed, or the body cannot be read.
pub fn fetch_page(url: &Url, options: &Options) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(Duration::from_secs(options.timeout_secs))
        .build()
        .map_err(|e| transport(&e))?;

    let response = client.get(url.as_str()).send().map_err(|e| transport(&e))?;

    let status = response.status();
    if !status.is_success() {
        debug!("{url} answered {status}");
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.bytes().map_err(|e| transport(&e))?;
    debug!("fetched {} bytes from {url}", body.len());

    Ok(encoding::decode_body(&body, content_type.as_deref()))
}

pub(crate) fn invalid_url(reason: String) -> Error {
    let err = Error::InvalidUrl(reason);
    error!("Error: {err}");
    err
}

fn transport(err: &reqwest::Error) -> Error {
    error!("Error: {err}");
    Error::Transport(err.to_string())
}
