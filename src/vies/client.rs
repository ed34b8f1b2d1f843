//! Blocking VIES `checkVat` client.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use super::soap::{check_vat_envelope, parse_check_vat_response};
use crate::core::{EuVatCheck, ViesError, is_vies_country_code};

/// Longest part of an unexpected response body kept in an error message.
const MAX_ERROR_BODY: usize = 200;

/// Check a VAT number against the EU VIES SOAP service.
///
/// `country_code` is the 2-letter VIES prefix (e.g. "DK", "EL" for Greece).
/// `vat_number` is the number part without the prefix. Neither is validated
/// here; VIES decides.
///
/// # Errors
///
/// Returns `ViesError::Network` on connection issues,
/// `ViesError::Fault` if VIES answers with a SOAP fault (e.g. a member state
/// is unavailable), `ViesError::Http` on other non-success statuses and
/// `ViesError::Parse` on unexpected response bodies.
pub fn check_vat(
    http: &Client,
    endpoint: &str,
    country_code: &str,
    vat_number: &str,
) -> Result<EuVatCheck, ViesError> {
    if !is_vies_country_code(country_code) {
        log::warn!("{country_code:?} is not a VIES member state code, VIES will likely reject it");
    }

    let envelope = check_vat_envelope(country_code, vat_number)?;
    log::debug!("POST {endpoint} checkVat {country_code} {vat_number}");

    let resp = http
        .post(endpoint)
        .header(CONTENT_TYPE, "text/xml; charset=utf-8")
        .header("SOAPAction", "\"\"")
        .body(envelope)
        .send()
        .map_err(|e| ViesError::Network(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .map_err(|e| ViesError::Network(e.to_string()))?;

    // VIES reports faults with HTTP 500, so look at the body first.
    let parsed = match parse_check_vat_response(&body) {
        Err(ViesError::Fault(msg)) => return Err(ViesError::Fault(msg)),
        _ if !status.is_success() => {
            return Err(ViesError::Http {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }
        parsed => parsed?,
    };

    Ok(EuVatCheck {
        country_code: country_code.to_string(),
        vat_number: vat_number.to_string(),
        valid: parsed.valid,
        name: parsed.name,
        address: parsed.address,
    })
}
