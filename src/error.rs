//! Error types for cipher transforms and frequency profiles

use thiserror::Error;

/// Errors produced by the cipher engine and the frequency analyzer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Vigenère key without alphabetic characters, or a non-integer Caesar key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Profile map with a missing, unknown or negative bucket
    #[error("Malformed frequency profile: {0}")]
    MalformedProfile(String),

    /// Cipher name other than caesar or vigenere
    #[error("Unsupported cipher: {0} (expected caesar or vigenere)")]
    UnsupportedCipher(String),
}

/// Result type for cipher and profile operations
pub type Result<T> = std::result::Result<T, CipherError>;
