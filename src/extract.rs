//! Scrape pipeline: fetch, parse, locate, resolve, report.

use tracing::debug;

use crate::result::ProfileRecord;
use crate::{dom, extractor, fetch, selector};
use crate::{Error, Options, Result};

/// Scrape an already fetched page.
pub(crate) fn scrape_document(html: &str, options: &Options) -> Result<ProfileRecord> {
    debug!("Processing {}...", options.url_or_empty());
    resolve_page(html, options)
}

/// Fetch `options.url` and scrape it.
pub(crate) fn scrape_url(options: &Options) -> Result<ProfileRecord> {
    debug!("Processing {}...", options.url_or_empty());

    let raw = options
        .url
        .as_deref()
        .ok_or_else(|| fetch::invalid_url("no URL given".to_string()))?;
    let url = fetch::parse_page_url(raw)?;
    let html = fetch::fetch_page(&url, options)?;
    resolve_page(&html, options)
}

fn resolve_page(html: &str, options: &Options) -> Result<ProfileRecord> {
    let url = options.url_or_empty();
    report_inert_flags(options);

    let doc = dom::parse(html);
    let located = selector::locate(&doc).ok_or_else(|| Error::UnsupportedLayout {
        url: url.to_string(),
    })?;
    debug!("Matched layout {}", located.variant);

    let record = extractor::resolve_profile(&located);
    record.log_summary();
    debug!("Processed {url}");

    Ok(record)
}

fn report_inert_flags(options: &Options) {
    if options.force_insert {
        debug!("force insert requested; no database is configured");
    }
    if options.force_delete {
        debug!("force delete requested; no database is configured");
    }
}
