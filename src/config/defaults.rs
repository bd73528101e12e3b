// src/config/defaults.rs
use crate::config::app::SummaryConfig;
use crate::consts::{MASK_CHAR, SUMMARY_VISIBLE_CHARS};

pub fn default_visible_chars() -> usize {
    SUMMARY_VISIBLE_CHARS
}

pub fn default_mask_char() -> char {
    MASK_CHAR
}

pub fn default_summary() -> SummaryConfig {
    SummaryConfig {
        visible_chars: default_visible_chars(),
        mask_char: default_mask_char(),
    }
}
