//! EU VAT number lookups through the VIES SOAP service.
//!
//! # Example
//!
//! ```ignore
//! use nordcheck::core::Config;
//! use nordcheck::vies::check_vat;
//!
//! let config = Config::default();
//! let http = reqwest::blocking::Client::new();
//! let result = check_vat(&http, config.vies_endpoint(), "DK", "12345678")?;
//! println!("valid: {}", result.valid);
//! ```

mod client;
pub mod soap;

pub use client::check_vat;
