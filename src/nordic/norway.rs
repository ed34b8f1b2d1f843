//! Brønnøysund Register Centre (brreg.no) lookups.

use reqwest::blocking::Client;

use super::html::title_text;
use super::{PageSignal, fetch_page};
use crate::core::{Config, NorwayCheck};

/// Word in the page title of a register entry ("Enhet" = entity).
pub const ENTITY_MARKER: &str = "Enhet";

/// Reads the company name from the page `<title>` when it carries a marker.
#[derive(Debug, Clone, Copy)]
pub struct TitleMarker {
    pub marker: &'static str,
}

impl Default for TitleMarker {
    fn default() -> Self {
        Self {
            marker: ENTITY_MARKER,
        }
    }
}

impl PageSignal for TitleMarker {
    /// Trimmed title text if the marker is present.
    type Output = Option<String>;

    fn extract(&self, html: &str) -> Option<String> {
        let title = title_text(html)?;
        title
            .contains(self.marker)
            .then(|| title.trim().to_string())
    }
}

/// Look up a Norwegian organisation number on brreg.no.
///
/// Anything other than a 200 page with a matching title, including
/// transport errors, yields `valid = false` and `company_name = "N/A"`.
pub fn validate_norwegian_org(http: &Client, config: &Config, org_nr: &str) -> NorwayCheck {
    validate_with(http, config, org_nr, &TitleMarker::default())
}

/// [`validate_norwegian_org`] with a custom page signal.
pub fn validate_with<S>(http: &Client, config: &Config, org_nr: &str, signal: &S) -> NorwayCheck
where
    S: PageSignal<Output = Option<String>>,
{
    let url = config.norway_url(org_nr);
    let mut result = NorwayCheck::not_found(org_nr, &url);

    if let Some(company_name) = fetch_page(http, &url).and_then(|page| signal.extract(&page)) {
        result.valid = true;
        result.company_name = company_name;
    }
    result
}
