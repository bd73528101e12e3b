// src/core/summary.rs
//! Redacted credential summaries for admin screens and audit logs

use serde::Serialize;

/// Keep the first `show` characters, replace the rest one-for-one with `mask_char`
pub fn mask(value: &str, show: usize, mask_char: char) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < show { c } else { mask_char })
        .collect()
}

/// Display-safe view of a stored credential
///
/// Field order is the display order: algorithm, iterations, salt, hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeSummary {
    pub algorithm: String,
    pub iterations: String,
    pub salt: String,
    pub hash: String,
}

impl SafeSummary {
    /// Ordered key/value pairs
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("algorithm", self.algorithm.as_str()),
            ("iterations", self.iterations.as_str()),
            ("salt", self.salt.as_str()),
            ("hash", self.hash.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_keeps_prefix_and_length() {
        assert_eq!(mask("860b4cefa9", 6, '*'), "860b4c****");
        assert_eq!(mask("abc", 6, '*'), "abc");
        assert_eq!(mask("", 6, '*'), "");
        assert_eq!(mask("abcdef", 0, '#'), "######");
    }

    #[test]
    fn entries_are_ordered() {
        let summary = SafeSummary {
            algorithm: "usercake".into(),
            iterations: "0".into(),
            salt: "860b4c*".into(),
            hash: "5e0158*".into(),
        };
        let keys: Vec<_> = summary.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["algorithm", "iterations", "salt", "hash"]);
    }
}
