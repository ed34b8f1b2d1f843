//! Core types shared by every checker: records, errors and configuration.

mod config;
mod countries;
mod error;
mod record;

pub use config::*;
pub use countries::is_vies_country_code;
pub use error::*;
pub use record::*;
