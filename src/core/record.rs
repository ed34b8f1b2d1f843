//! Verification records as stored in the log.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Company name used by the Norway check when the register page has no match.
pub const NOT_AVAILABLE: &str = "N/A";

/// One entry of the verification log.
///
/// The JSON form is flat: the `type` tag and the check's own fields first,
/// then `verified_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    #[serde(flatten)]
    pub check: Check,
    /// Local time the record was appended; `None` until it is logged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<NaiveDateTime>,
}

impl VerificationRecord {
    /// The `type` tag written to the log.
    pub fn type_tag(&self) -> &'static str {
        self.check.type_tag()
    }
}

impl From<Check> for VerificationRecord {
    fn from(check: Check) -> Self {
        Self {
            check,
            verified_at: None,
        }
    }
}

/// The result of one country check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Check {
    #[serde(rename = "EU_VAT")]
    EuVat(EuVatCheck),
    #[serde(rename = "NO_ORG")]
    Norway(NorwayCheck),
    #[serde(rename = "SE_ORG")]
    Sweden(SwedenCheck),
    #[serde(rename = "IS_MANUAL")]
    Iceland(IcelandCheck),
}

impl Check {
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::EuVat(_) => "EU_VAT",
            Self::Norway(_) => "NO_ORG",
            Self::Sweden(_) => "SE_ORG",
            Self::Iceland(_) => "IS_MANUAL",
        }
    }
}

/// Answer from VIES for one VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EuVatCheck {
    pub country_code: String,
    pub vat_number: String,
    /// Validity exactly as reported by VIES.
    pub valid: bool,
    /// Registered name as VIES returns it (`---` when withheld); `None` if
    /// the element is missing or empty.
    pub name: Option<String>,
    /// Registered address as VIES returns it; `None` if missing or empty.
    pub address: Option<String>,
}

/// Brønnøysund register lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NorwayCheck {
    pub org_nr: String,
    pub country: String,
    pub valid: bool,
    pub company_name: String,
    /// URL that was fetched.
    pub source: String,
}

impl NorwayCheck {
    /// The result recorded when the page is missing or does not match.
    pub fn not_found(org_nr: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            org_nr: org_nr.into(),
            country: "NO".into(),
            valid: false,
            company_name: NOT_AVAILABLE.into(),
            source: source.into(),
        }
    }
}

/// Allabolag company profile lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwedenCheck {
    pub org_nr: String,
    pub country: String,
    /// URL that was fetched.
    pub source: String,
    /// The page mentions VAT registration.
    pub momsregistrerad: bool,
    /// The page carries company information.
    pub found: bool,
}

impl SwedenCheck {
    pub fn not_found(org_nr: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            org_nr: org_nr.into(),
            country: "SE".into(),
            source: source.into(),
            momsregistrerad: false,
            found: false,
        }
    }
}

/// Iceland has no scrapeable register; the record only carries a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcelandCheck {
    pub country: String,
    pub company_number: String,
    /// Page a human has to open to finish the lookup.
    pub manual_url: String,
}
