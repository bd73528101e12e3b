// src/core/credential.rs
//! Structured decode of `"<tag>$<salt><digest>"` credentials
//!
//! Every operation that reads a stored credential goes through here, so the
//! format lives in exactly one place.

use crate::consts::{ALGORITHM, DIGEST_LENGTH, ENCODED_BODY_LENGTH, SALT_LENGTH, SEPARATOR};
use crate::error::{HasherError, Result};

/// A decoded UserCake credential, borrowing from the stored string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCredential<'a> {
    pub tag: &'a str,
    pub salt: &'a str,
    pub digest: &'a str,
}

/// Split on the first `$` into `(tag, body)`
pub fn split_tag(encoded: &str) -> Result<(&str, &str)> {
    encoded.split_once(SEPARATOR).ok_or_else(|| {
        HasherError::MalformedInput(format!("no '{SEPARATOR}' separator in credential"))
    })
}

/// Tag of any tagged credential, `None` if there is no separator
pub fn identify_algorithm(encoded: &str) -> Option<&str> {
    split_tag(encoded).ok().map(|(tag, _)| tag)
}

impl<'a> ParsedCredential<'a> {
    /// Decode a credential that must belong to this scheme
    ///
    /// Foreign tags are a routing bug (`PreconditionFailed`); a short or
    /// non-ASCII body is corrupt data (`MalformedInput`).
    pub fn decode(encoded: &'a str) -> Result<Self> {
        let (tag, body) = split_tag(encoded)?;

        if tag != ALGORITHM {
            return Err(HasherError::PreconditionFailed(format!(
                "expected algorithm '{ALGORITHM}', got '{tag}'"
            )));
        }

        if !body.is_ascii() || body.len() != ENCODED_BODY_LENGTH {
            return Err(HasherError::MalformedInput(format!(
                "expected {ENCODED_BODY_LENGTH} ASCII characters after the tag, got {}",
                body.chars().count()
            )));
        }

        let (salt, digest) = body.split_at(SALT_LENGTH);
        debug_assert_eq!(digest.len(), DIGEST_LENGTH);

        Ok(Self { tag, salt, digest })
    }

    /// Render back to the stored form
    pub fn encode(&self) -> String {
        format!("{}{SEPARATOR}{}{}", self.tag, self.salt, self.digest)
    }
}
