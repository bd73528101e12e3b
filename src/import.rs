// src/import.rs
//! One-time import of credentials from a UserCake `users.password` column
//!
//! UserCake stored the bare 65-char `salt || sha1hex` value. Prefixing it
//! with `usercake$` makes it routable by tag alongside other schemes.

use tracing::{debug, info};

use crate::consts::{ALGORITHM, DIGEST_LENGTH, ENCODED_BODY_LENGTH, SALT_LENGTH, SEPARATOR};
use crate::core::ParsedCredential;
use crate::error::{HasherError, Result};

/// True for a bare UserCake column value: 65 ASCII chars ending in 40 hex digits
pub fn is_raw_legacy_value(raw: &str) -> bool {
    raw.len() == ENCODED_BODY_LENGTH
        && raw.is_ascii()
        && !raw.contains(SEPARATOR)
        && raw[SALT_LENGTH..]
            .bytes()
            .all(|b| b.is_ascii_hexdigit())
}

/// Turn a stored UserCake value into a tagged credential
///
/// Already-tagged values are validated and passed through unchanged.
pub fn import_legacy_value(raw: &str) -> Result<String> {
    let raw = raw.trim();

    if raw.starts_with(ALGORITHM) && raw[ALGORITHM.len()..].starts_with(SEPARATOR) {
        ParsedCredential::decode(raw)?;
        debug!("credential already tagged, passing through");
        return Ok(raw.to_owned());
    }

    if !is_raw_legacy_value(raw) {
        return Err(HasherError::MalformedInput(format!(
            "expected {SALT_LENGTH}-char salt followed by {DIGEST_LENGTH} hex digits"
        )));
    }

    Ok(format!("{ALGORITHM}{SEPARATOR}{raw}"))
}

/// Batch form of [`import_legacy_value`]; one result per input, in order
pub fn import_legacy_values<'a, I>(values: I) -> Vec<Result<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let results: Vec<_> = values.into_iter().map(import_legacy_value).collect();
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        imported = results.len() - failed,
        failed, "imported legacy credentials"
    );
    results
}
