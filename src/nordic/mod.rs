//! Nordic business register lookups.
//!
//! Norway and Sweden are scraped from public HTML pages; Iceland only gets a
//! link for manual lookup. None of these validate their input: numbers are
//! placed into the URL as given.
//!
//! A page that cannot be fetched is treated like a page without a match.
//! The result is the country's negative record and a warning in the log
//! output, never an error.

pub mod html;
mod iceland;
mod norway;
mod signal;
mod sweden;

use reqwest::StatusCode;
use reqwest::blocking::Client;

pub use iceland::{check_iceland_manual_url, manual_url_at};
pub use norway::{ENTITY_MARKER, TitleMarker, validate_norwegian_org};
pub use signal::PageSignal;
pub use sweden::{
    COMPANY_INFO_MARKER, ProfileFlags, TextMarkers, VAT_REGISTERED_MARKER,
    validate_swedish_company,
};

/// Custom-signal variants of the scraping checks.
pub mod with_signal {
    pub use super::norway::validate_with as norway;
    pub use super::sweden::validate_with as sweden;
}

/// GET `url` and return the body only for a 200 response.
fn fetch_page(http: &Client, url: &str) -> Option<String> {
    log::debug!("GET {url}");
    let resp = match http.get(url).send() {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("GET {url} failed: {e}");
            return None;
        }
    };

    let status = resp.status();
    if status != StatusCode::OK {
        log::info!("GET {url} returned {status}");
        return None;
    }

    match resp.text() {
        Ok(body) => Some(body),
        Err(e) => {
            log::warn!("reading {url} failed: {e}");
            None
        }
    }
}
