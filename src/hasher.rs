// src/hasher.rs
//! `UserCakeHasher`: verify and import UserCake salted SHA-1 credentials
//!
//! Credentials look like `usercake$<25-char salt><40-char hex sha1>`.
//! The scheme has no work factor and no domain separation. It exists so old
//! accounts can still log in; `must_update` flags every one of them so the
//! framework rehashes with a modern scheme on the next successful login.

use tracing::{debug, warn};

use crate::config::HasherConfig;
use crate::consts::{ALGORITHM, ITERATIONS, SALT_LENGTH};
use crate::core::{
    generate_salt, legacy_digest, mask, split_tag, ParsedCredential, SafeSummary,
};
use crate::error::{HasherError, Result};

/// The seam a hasher registry dispatches through
///
/// The registry picks an implementation by tag (see
/// [`identify_algorithm`](crate::core::identify_algorithm)) before calling
/// `verify` or `safe_summary`; handing an implementation a foreign
/// credential is a precondition failure, not a failed login.
pub trait PasswordHasher: Send + Sync {
    /// Tag written before the first `$`
    fn algorithm(&self) -> &'static str;

    fn salt(&self) -> String;

    fn encode(&self, password: &[u8], salt: Option<&str>) -> Result<String>;

    /// `Ok(false)` on a wrong password; `Err` only for broken input
    fn verify(&self, password: &[u8], encoded: &str) -> Result<bool>;

    fn safe_summary(&self, encoded: &str) -> Result<SafeSummary>;

    fn must_update(&self, encoded: &str) -> Result<bool>;

    /// Extra work to equalize timing with slower schemes on failed lookups
    fn harden_runtime(&self, _password: &[u8], _encoded: &str) {}
}

/// Stateless UserCake hasher
#[derive(Debug, Clone, Default)]
pub struct UserCakeHasher {
    config: HasherConfig,
}

impl UserCakeHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HasherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }
}

impl PasswordHasher for UserCakeHasher {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn salt(&self) -> String {
        generate_salt()
    }

    /// Only for importing legacy data; never pick this scheme for new accounts.
    ///
    /// An empty `salt` counts as omitted and a fresh one is generated.
    fn encode(&self, password: &[u8], salt: Option<&str>) -> Result<String> {
        let salt = match salt.filter(|s| !s.is_empty()) {
            Some(s) => s.to_owned(),
            None => self.salt(),
        };

        let len = salt.chars().count();
        if len != SALT_LENGTH {
            warn!(len, "rejected salt of wrong length");
            return Err(HasherError::PreconditionFailed(format!(
                "salt must be {SALT_LENGTH} characters, got {len}"
            )));
        }

        let digest = legacy_digest(&salt, password)?;
        Ok(ParsedCredential {
            tag: ALGORITHM,
            salt: &salt,
            digest: &digest,
        }
        .encode())
    }

    fn verify(&self, password: &[u8], encoded: &str) -> Result<bool> {
        let parsed = ParsedCredential::decode(encoded).inspect_err(|e| {
            warn!(error = %e, "cannot verify against stored credential");
        })?;

        let computed = legacy_digest(parsed.salt, password)?;
        let matched = computed == parsed.digest;
        debug!(algorithm = ALGORITHM, matched, "verified legacy credential");
        Ok(matched)
    }

    fn safe_summary(&self, encoded: &str) -> Result<SafeSummary> {
        let parsed = ParsedCredential::decode(encoded)?;
        let show = self.config.summary.effective_visible_chars();
        let mask_char = self.config.summary.mask_char;

        Ok(SafeSummary {
            algorithm: ALGORITHM.to_owned(),
            iterations: ITERATIONS.to_string(),
            salt: mask(parsed.salt, show, mask_char),
            hash: mask(parsed.digest, show, mask_char),
        })
    }

    /// Every UserCake credential must be upgraded; other tags are not ours to judge.
    fn must_update(&self, encoded: &str) -> Result<bool> {
        let (tag, _) = split_tag(encoded)?;
        Ok(tag == ALGORITHM)
    }
}
