use std::path::PathBuf;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors from the EU VIES SOAP service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// Connection, TLS, timeout or body read failure.
    #[error("VIES network error: {0}")]
    Network(String),

    /// The service answered with a SOAP fault (e.g. `MS_UNAVAILABLE`, `INVALID_INPUT`).
    #[error("VIES fault: {0}")]
    Fault(String),

    /// Non-success HTTP status without a SOAP fault in the body.
    #[error("VIES HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response could not be read as a `checkVatResponse`.
    #[error("VIES parse error: {0}")]
    Parse(String),
}

/// Errors from the append-only verification log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The log file could not be read or written.
    #[error("log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing log file is not a JSON array of records.
    #[error("log file {path} is not a valid verification log: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be turned into JSON.
    #[error("could not serialize verification record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A failed EU VAT lookup, returned to the caller instead of a record.
///
/// Serializes as `{"error": "...", "country_code": "...", "vat_number": "..."}`.
/// Failures are never written to the log.
#[derive(Debug, Serialize)]
pub struct LookupFailure {
    /// What went wrong.
    #[serde(serialize_with = "display")]
    pub error: ViesError,
    /// Country code as entered.
    pub country_code: String,
    /// VAT number as entered.
    pub vat_number: String,
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}: {}", self.country_code, self.vat_number, self.error)
    }
}

fn display<S: Serializer>(error: &ViesError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

/// Error from a check that goes through the log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The remote lookup failed; nothing was logged.
    #[error("lookup failed for {0}")]
    Lookup(LookupFailure),

    /// The lookup succeeded but the log could not be updated.
    #[error(transparent)]
    Store(#[from] StoreError),
}
