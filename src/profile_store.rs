//! Frequency model persistence
//!
//! A model file is a flat JSON object holding exactly 26 entries, `"0"`
//! through `"25"`, each a non-negative letter count:
//!
//! ```json
//! {"0": 1472, "1": 348, "2": 403, ...}
//! ```

use crate::error::CipherError;
use crate::profile::{FrequencyProfile, ProfileMap};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or writing a model file
#[derive(Error, Debug)]
pub enum ProfileStoreError {
    #[error("Model file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid model format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error(transparent)]
    Malformed(#[from] CipherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for model persistence operations
pub type Result<T> = std::result::Result<T, ProfileStoreError>;

/// Serialize a profile as a flat JSON object
pub fn profile_to_json(profile: &FrequencyProfile) -> Result<String> {
    profile_map_to_json(&profile.to_map()?)
}

/// Serialize a persisted-form profile, rejecting maps that could not be
/// loaded back
pub fn profile_map_to_json(map: &ProfileMap) -> Result<String> {
    FrequencyProfile::from_map(map)?;
    Ok(serde_json::to_string(map)?)
}

/// Parse and validate a flat JSON profile object
pub fn profile_from_json(content: &str) -> Result<FrequencyProfile> {
    let map: ProfileMap = serde_json::from_str(content)?;
    Ok(FrequencyProfile::from_map(&map)?)
}

/// Write a profile to a model file
pub fn save_profile(profile: &FrequencyProfile, path: impl AsRef<Path>) -> Result<()> {
    save_profile_map(&profile.to_map()?, path)
}

/// Write a persisted-form profile to a model file
pub fn save_profile_map(map: &ProfileMap, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, profile_map_to_json(map)?)?;
    tracing::debug!(path = %path.display(), buckets = map.len(), "saved frequency model");
    Ok(())
}

/// Read a profile from a model file
pub fn load_profile(path: impl AsRef<Path>) -> Result<FrequencyProfile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ProfileStoreError::FileNotFound(path.display().to_string()));
    }

    let profile = profile_from_json(&fs::read_to_string(path)?)?;
    tracing::debug!(path = %path.display(), letters = profile.total(), "loaded frequency model");
    Ok(profile)
}
