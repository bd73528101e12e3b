// src/error.rs
//! Public error type for the entire crate
//!
//! A wrong password is never an error: `verify` returns `Ok(false)`.
//! Everything here means the caller or the stored data is broken.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HasherError {
    /// Contract violation: wrong salt length on encode, or a credential
    /// with a foreign tag handed to this hasher.
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// Encoded credential is structurally broken (no separator, short body).
    #[error("malformed credential: {0}")]
    MalformedInput(String),

    /// Input that cannot be represented in the ASCII credential format.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HasherError {
    /// True for the caller-misuse kinds that no retry can fix
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            HasherError::PreconditionFailed(_) | HasherError::MalformedInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HasherError>;
