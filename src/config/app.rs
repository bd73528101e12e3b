// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;

use crate::consts::SUMMARY_VISIBLE_CHARS;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HasherConfig {
    #[serde(default = "default_summary")]
    pub summary: SummaryConfig,
}

/// Redaction settings for `safe_summary`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryConfig {
    #[serde(default = "default_visible_chars")]
    pub visible_chars: usize,
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            summary: default_summary(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        default_summary()
    }
}

impl SummaryConfig {
    /// Visible prefix length, capped so a config can only reveal less
    pub fn effective_visible_chars(&self) -> usize {
        self.visible_chars.min(SUMMARY_VISIBLE_CHARS)
    }
}

impl HasherConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded hasher config");
        Ok(config)
    }
}
