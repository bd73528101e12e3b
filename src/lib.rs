// src/lib.rs
//! usercake-hasher: legacy UserCake password verification
//!
//! Features:
//! - Verify `usercake$<salt><sha1>` credentials
//! - Import bare UserCake column values for migration
//! - Redacted summaries for audit output
//! - Always flags credentials for upgrade to a modern scheme

pub mod config;
pub mod consts;
pub mod core;
pub mod error;
pub mod hasher;
pub mod import;

// Re-export everything users need at the crate root
pub use config::{HasherConfig, SummaryConfig};
pub use crate::core::{identify_algorithm, ParsedCredential, SafeSummary};
pub use error::{HasherError, Result};
pub use hasher::{PasswordHasher, UserCakeHasher};
pub use import::{import_legacy_value, import_legacy_values, is_raw_legacy_value};
