// In: src/config.rs

//! The single source of truth for all lexitrie compilation settings.
//!
//! `LexitrieConfig` is created once at the application boundary (typically from
//! a JSON document) and then passed down by reference to every pipeline stage.
//! Historical variants of the dictionary tool are expressed here as settings
//! rather than as separate code paths.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::LexitrieError;

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// What to do when an aggregated suffix frequency does not fit the one-byte
/// frequency field of the trie encoding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyOverflowPolicy {
    /// **Default:** Clamp the value to 255. The ranking order among very frequent
    /// suffixes is lost, but the run always completes.
    #[default]
    Saturate,

    /// Fail the run with `LexitrieError::FrequencyOverflow`.
    Reject,
}

impl FrequencyOverflowPolicy {
    /// Maps an aggregated frequency onto the byte written into the trie.
    pub fn apply(self, prefix: &str, suffix: &str, frequency: u64) -> Result<u8, LexitrieError> {
        match u8::try_from(frequency) {
            Ok(byte) => Ok(byte),
            Err(_) => match self {
                FrequencyOverflowPolicy::Saturate => Ok(u8::MAX),
                FrequencyOverflowPolicy::Reject => Err(LexitrieError::FrequencyOverflow {
                    prefix: prefix.to_string(),
                    suffix: suffix.to_string(),
                    frequency,
                }),
            },
        }
    }
}

/// Where the artifact writer puts its files.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Base path; the writer appends `.dict`, `.vocab`, `.i` and `.bf`.
    #[serde(default)]
    pub base_path: Option<PathBuf>,
}

//==================================================================================
// II. The Unified LexitrieConfig
//==================================================================================

/// The single, unified configuration for one dictionary compilation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LexitrieConfig {
    /// Entries whose frequency is less than or equal to this value are dropped.
    #[serde(default)]
    pub min_frequency: u64,

    /// If true, a trailing possessive `'s` is removed from each word before it
    /// is indexed.
    #[serde(default)]
    pub strip_trailing_possessive: bool,

    /// Policy for suffix frequencies above 255.
    #[serde(default)]
    pub frequency_overflow: FrequencyOverflowPolicy,

    /// Upper bound on trie encoding passes. When `None` the bound is derived
    /// from the number of trie edges.
    #[serde(default)]
    pub max_fixup_passes: Option<usize>,

    /// Output locations, only needed when writing artifacts to disk.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for LexitrieConfig {
    fn default() -> Self {
        Self {
            min_frequency: 0,
            strip_trailing_possessive: false,
            frequency_overflow: FrequencyOverflowPolicy::default(),
            max_fixup_passes: None,
            output: OutputConfig::default(),
        }
    }
}

impl LexitrieConfig {
    /// Parses and validates a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, LexitrieError> {
        let config: LexitrieConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings that serde cannot check on its own.
    pub fn validate(&self) -> Result<(), LexitrieError> {
        if self.max_fixup_passes == Some(0) {
            return Err(LexitrieError::InputError(
                "max_fixup_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the configured output base path, or an `InputError` if the run
    /// was asked to write artifacts without one.
    pub fn require_output_base(&self) -> Result<&PathBuf, LexitrieError> {
        self.output.base_path.as_ref().ok_or_else(|| {
            LexitrieError::InputError("missing output base path (output.base_path)".to_string())
        })
    }
}
