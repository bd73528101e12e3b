// src/core/digest.rs
//! The UserCake digest: lowercase hex SHA-1 over `salt || password`
//!
//! No separator or length prefix between the two parts. Stored credentials
//! depend on this exact construction, so it must stay as is.

use sha1::{Digest, Sha1};

use crate::error::{HasherError, Result};

/// Compute the 40-char hex digest for `salt` and `password`
///
/// The salt must be ASCII, since the encoded credential format is.
pub fn legacy_digest(salt: &str, password: &[u8]) -> Result<String> {
    if !salt.is_ascii() {
        return Err(HasherError::InvalidInput(
            "salt must be ASCII to fit the credential format".into(),
        ));
    }

    let mut hasher = Sha1::new();
    hasher.update(salt.as_bytes());
    hasher.update(password);
    Ok(hex::encode(hasher.finalize()))
}
