//! Country codes accepted by VIES.
//!
//! VIES uses the EU-27 ISO 3166-1 alpha-2 codes with two exceptions:
//! Greece is `EL` (not `GR`) and Northern Ireland traders use `XI`.

/// Check whether `code` is a VIES member state prefix.
///
/// Lookups do not depend on this; it only drives a warning for codes VIES
/// will most likely reject.
pub fn is_vies_country_code(code: &str) -> bool {
    VIES_COUNTRY_CODES.binary_search(&code).is_ok()
}

/// VIES member state prefixes (28 entries), sorted for binary search.
static VIES_COUNTRY_CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "HR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK", "XI",
];
