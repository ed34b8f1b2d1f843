//! Endpoints, log location and HTTP settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "vat_verification_log.json";

/// Public WSDL describing the VIES `checkVat` service.
pub const VIES_WSDL_URL: &str = "https://ec.europa.eu/taxation_customs/vies/checkVatService.wsdl";

/// SOAP endpoint declared by the VIES WSDL.
pub const VIES_ENDPOINT: &str = "https://ec.europa.eu/taxation_customs/vies/services/checkVatService";

pub const NORWAY_BASE: &str = "https://w2.brreg.no";
pub const SWEDEN_BASE: &str = "https://www.allabolag.se";
pub const ICELAND_BASE: &str = "https://www.rsk.is/fyrirtaekjaskra/leit";

/// Runtime settings for all checkers.
///
/// Defaults point at the public services; tests swap in local servers
/// through the `with_*` methods.
#[derive(Debug, Clone)]
pub struct Config {
    log_path: PathBuf,
    vies_endpoint: String,
    norway_base: String,
    sweden_base: String,
    iceland_base: String,
    timeout: Duration,
    user_agent: String,
    use_system_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            vies_endpoint: VIES_ENDPOINT.into(),
            norway_base: NORWAY_BASE.into(),
            sweden_base: SWEDEN_BASE.into(),
            iceland_base: ICELAND_BASE.into(),
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
            use_system_proxy: true,
        }
    }
}

impl Config {
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    pub fn with_vies_endpoint(mut self, url: impl Into<String>) -> Self {
        self.vies_endpoint = url.into();
        self
    }

    pub fn with_norway_base(mut self, base: impl Into<String>) -> Self {
        self.norway_base = trim_base(base.into());
        self
    }

    pub fn with_sweden_base(mut self, base: impl Into<String>) -> Self {
        self.sweden_base = trim_base(base.into());
        self
    }

    pub fn with_iceland_base(mut self, base: impl Into<String>) -> Self {
        self.iceland_base = trim_base(base.into());
        self
    }

    /// Per-request HTTP timeout (default 30 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn vies_endpoint(&self) -> &str {
        &self.vies_endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn use_system_proxy(&self) -> bool {
        self.use_system_proxy
    }

    pub fn iceland_base(&self) -> &str {
        &self.iceland_base
    }

    /// Brreg detail page for an organisation number.
    pub fn norway_url(&self, org_nr: &str) -> String {
        format!("{}/enhet/sok/detalj.jsp?orgnr={org_nr}", self.norway_base)
    }

    /// Allabolag profile page for an organisation number.
    pub fn sweden_url(&self, org_nr: &str) -> String {
        format!("{}/{org_nr}", self.sweden_base)
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
