//! shiftcrack - Classical substitution ciphers and Caesar key recovery
//!
//! This library provides case-preserving Caesar and Vigenère transforms, 26-bucket
//! letter-frequency profiles, and a frequency-analysis attack that recovers an
//! unknown Caesar shift.
//!
//! # Examples
//!
//! ```
//! use shiftcrack::{caesar, recover_caesar_shift, ENGLISH_REFERENCE};
//!
//! let plain = "Frequency analysis was first described by al-Kindi in the ninth century, \
//!     and it remained the standard attack on simple substitution ciphers for a very \
//!     long time because the letters of any natural language appear with stable, \
//!     uneven frequencies that survive a fixed shift of the alphabet.";
//! let cipher = caesar(plain, 7);
//!
//! let recovery = recover_caesar_shift(&cipher, &ENGLISH_REFERENCE);
//! assert_eq!(recovery.shift, 7);
//! assert_eq!(recovery.plaintext, plain);
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod profile;
pub mod profile_store;
pub mod recovery;

pub use cipher::{caesar, decode, encode, vigenere, CipherKind, KeyStream, Mode};
pub use error::CipherError;
pub use profile::{
    build_profile, train_profile, FrequencyProfile, ProfileMap, ENGLISH_REFERENCE, MAX_BUCKET_COUNT,
};
pub use recovery::{
    hack, hack_with, recover_caesar_shift, recover_caesar_shift_with, score_difference,
    score_normalized, Recovery, Scoring,
};
