//! Runs a country check and records the outcome in the log.

use reqwest::blocking::Client;

use crate::core::{
    Check, CheckError, Config, LookupFailure, StoreError, VerificationRecord,
};
use crate::menu::Checks;
use crate::nordic::{self, manual_url_at};
use crate::store::LogStore;
use crate::vies;

/// All four checkers sharing one HTTP client and one log.
///
/// Successful checks are appended to the log; EU lookups that fail are
/// returned as [`LookupFailure`] and not logged. Norway and Sweden never
/// fail: an unreachable page is logged as a negative result.
#[derive(Debug)]
pub struct Verifier {
    config: Config,
    http: Client,
    store: LogStore,
}

impl Verifier {
    /// # Errors
    ///
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent());
        if !config.use_system_proxy() {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        let store = LogStore::new(config.log_path());
        Ok(Self {
            config,
            http,
            store,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Check a VAT number with VIES and log the answer.
    pub fn validate_eu_vat(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<VerificationRecord, CheckError> {
        match vies::check_vat(&self.http, self.config.vies_endpoint(), country_code, vat_number) {
            Ok(check) => Ok(self.store.append(Check::EuVat(check).into())?),
            Err(error) => {
                log::warn!("VIES lookup for {country_code}{vat_number} failed: {error}");
                Err(CheckError::Lookup(LookupFailure {
                    error,
                    country_code: country_code.to_string(),
                    vat_number: vat_number.to_string(),
                }))
            }
        }
    }

    pub fn validate_norwegian_org(&self, org_nr: &str) -> Result<VerificationRecord, StoreError> {
        let check = nordic::validate_norwegian_org(&self.http, &self.config, org_nr);
        self.store.append(Check::Norway(check).into())
    }

    pub fn validate_swedish_company(&self, org_nr: &str) -> Result<VerificationRecord, StoreError> {
        let check = nordic::validate_swedish_company(&self.http, &self.config, org_nr);
        self.store.append(Check::Sweden(check).into())
    }

    pub fn check_iceland_manual_url(
        &self,
        company_number: &str,
    ) -> Result<VerificationRecord, StoreError> {
        let check = manual_url_at(self.config.iceland_base(), company_number);
        self.store.append(Check::Iceland(check).into())
    }
}

impl Checks for Verifier {
    fn eu_vat(&self, country_code: &str, vat_number: &str) -> Result<VerificationRecord, CheckError> {
        self.validate_eu_vat(country_code, vat_number)
    }

    fn norway(&self, org_nr: &str) -> Result<VerificationRecord, StoreError> {
        self.validate_norwegian_org(org_nr)
    }

    fn sweden(&self, org_nr: &str) -> Result<VerificationRecord, StoreError> {
        self.validate_swedish_company(org_nr)
    }

    fn iceland(&self, company_number: &str) -> Result<VerificationRecord, StoreError> {
        self.check_iceland_manual_url(company_number)
    }
}
