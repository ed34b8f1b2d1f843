//! allabolag.se company profile lookups.

use reqwest::blocking::Client;

use super::html::page_text;
use super::{PageSignal, fetch_page};
use crate::core::{Config, SwedenCheck};

/// Heading shown on every company profile ("company information").
pub const COMPANY_INFO_MARKER: &str = "företagsinformation";

/// Shown when the company is VAT-registered.
pub const VAT_REGISTERED_MARKER: &str = "momsregistrerad";

/// Flags read from a profile page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileFlags {
    pub found: bool,
    pub momsregistrerad: bool,
}

/// Case-insensitive substring search over the page text.
#[derive(Debug, Clone, Copy)]
pub struct TextMarkers {
    pub found: &'static str,
    pub vat_registered: &'static str,
}

impl Default for TextMarkers {
    fn default() -> Self {
        Self {
            found: COMPANY_INFO_MARKER,
            vat_registered: VAT_REGISTERED_MARKER,
        }
    }
}

impl PageSignal for TextMarkers {
    type Output = ProfileFlags;

    fn extract(&self, html: &str) -> ProfileFlags {
        let text = page_text(html).to_lowercase();
        ProfileFlags {
            found: text.contains(&self.found.to_lowercase()),
            momsregistrerad: text.contains(&self.vat_registered.to_lowercase()),
        }
    }
}

/// Look up a Swedish organisation number on allabolag.se.
///
/// Both flags stay false on non-200 responses and transport errors.
pub fn validate_swedish_company(http: &Client, config: &Config, org_nr: &str) -> SwedenCheck {
    validate_with(http, config, org_nr, &TextMarkers::default())
}

/// [`validate_swedish_company`] with a custom page signal.
pub fn validate_with<S>(http: &Client, config: &Config, org_nr: &str, signal: &S) -> SwedenCheck
where
    S: PageSignal<Output = ProfileFlags>,
{
    let url = config.sweden_url(org_nr);
    let mut result = SwedenCheck::not_found(org_nr, &url);

    if let Some(page) = fetch_page(http, &url) {
        let flags = signal.extract(&page);
        result.found = flags.found;
        result.momsregistrerad = flags.momsregistrerad;
    }
    result
}
