//! # nordcheck
//!
//! Business registration and VAT lookups for the EU, Norway, Sweden and
//! Iceland, with every result appended to a local JSON log.
//!
//! | Country | Source | How |
//! |---------|--------|-----|
//! | EU | VIES `checkVat` | SOAP request |
//! | Norway | brreg.no | page title |
//! | Sweden | allabolag.se | page text markers |
//! | Iceland | rsk.is | link for manual lookup, no request |
//!
//! ## Quick Start
//!
//! ```no_run
//! use nordcheck::{Config, Verifier};
//!
//! let verifier = Verifier::new(Config::default().with_log_path("checks.json")).unwrap();
//! let record = verifier.check_iceland_manual_url("5902697199").unwrap();
//! assert_eq!(record.type_tag(), "IS_MANUAL");
//! assert!(record.verified_at.is_some());
//! ```
//!
//! All I/O is blocking. The log has no locking and is meant for one process
//! at a time.

pub mod core;
pub mod menu;
pub mod nordic;
pub mod store;
pub mod verifier;
pub mod vies;

// Re-export the everyday types at crate root for convenience
pub use crate::core::*;
pub use crate::menu::{Checks, Menu};
pub use crate::store::LogStore;
pub use crate::verifier::Verifier;
