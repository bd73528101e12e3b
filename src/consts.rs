// src/consts.rs
//! Shared constants: the fixed parameters of the UserCake scheme

/// Tag that prefixes every credential produced by this scheme
pub const ALGORITHM: &str = "usercake";

/// Separates the tag from the salt+digest body (split on the first one only)
pub const SEPARATOR: char = '$';

/// Salt length in characters, as generated by UserCake
pub const SALT_LENGTH: usize = 25;

/// Hex-encoded SHA-1 digest length
pub const DIGEST_LENGTH: usize = 40;

/// Length of everything after the separator: salt followed by digest
pub const ENCODED_BODY_LENGTH: usize = SALT_LENGTH + DIGEST_LENGTH;

/// No key stretching: reported verbatim in summaries
pub const ITERATIONS: u32 = 0;

/// Characters of salt/digest left readable in a summary
// Upper bound: config may lower it, never raise it
pub const SUMMARY_VISIBLE_CHARS: usize = 6;

/// Replacement character for redacted summary output
pub const MASK_CHAR: char = '*';
