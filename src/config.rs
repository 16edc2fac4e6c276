// Settings for the shiftcrack command-line tool
//
// Loaded from an optional TOML file; command-line flags override file values.

use crate::cipher::CipherKind;
use crate::recovery::Scoring;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default bound on text read from a file or stdin (16 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Errors raised while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Tool settings
///
/// # Example
/// ```
/// use shiftcrack::config::Settings;
/// use shiftcrack::recovery::Scoring;
///
/// let settings = Settings::default();
/// assert_eq!(settings.scoring, Scoring::Normalized);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Scoring convention for `hack`
    pub scoring: Scoring,

    /// Upper bound on input text size; larger input is rejected, not truncated
    pub max_input_bytes: usize,

    /// Cipher used when `--cipher` is not given
    pub default_cipher: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoring: Scoring::Normalized,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            default_cipher: "caesar".to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a TOML file
    ///
    /// # Example TOML
    /// ```toml
    /// scoring = "raw"
    /// max_input_bytes = 1048576
    /// default_cipher = "vigenere"
    /// ```
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_input_bytes must be greater than 0".to_string(),
            ));
        }

        self.default_cipher
            .parse::<CipherKind>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(())
    }
}
