// src/core/salt.rs
//! Salt generation for the UserCake scheme

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::consts::SALT_LENGTH;

/// Fresh 25-character salt from `[A-Za-z0-9]`
///
/// `rand::rng()` is a thread-local CSPRNG seeded from the OS; it never
/// blocks on entropy and needs no locking across threads.
pub fn generate_salt() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LENGTH)
        .map(char::from)
        .collect()
}

/// Right length and alphabet for a salt this crate could have generated
pub fn is_valid_salt(salt: &str) -> bool {
    salt.len() == SALT_LENGTH && salt.bytes().all(|b| b.is_ascii_alphanumeric())
}
