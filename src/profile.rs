//! Letter-frequency profiles
//!
//! A profile is a 26-bucket histogram of case-folded letter counts. Profiles
//! are immutable values: rotation for shift scoring returns a new profile.
//!
//! The persisted form is a flat map from the labels `"0"` through `"25"` to
//! non-negative counts ([`ProfileMap`]). Persisted buckets are bounded by
//! [`MAX_BUCKET_COUNT`] so every loaded model can be scored without overflow.

use crate::alphabet::{letter_index, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use std::collections::BTreeMap;

/// Flat label → count map used for persistence
///
/// Counts are signed so that negative entries read from a model file can be
/// rejected as malformed rather than failing to parse.
pub type ProfileMap = BTreeMap<String, i64>;

/// Largest count a persisted bucket may hold
pub const MAX_BUCKET_COUNT: u64 = u32::MAX as u64;

/// English letter counts used when no reference model is supplied
pub const ENGLISH_REFERENCE: FrequencyProfile = FrequencyProfile::from_counts([
    1472, 348, 403, 1047, 2483, 351, 506, 1256, 1174, 24, 224, 988, 494, 1249, 1470, 364, 6, 1171,
    1293, 1688, 635, 216, 490, 28, 484, 10,
]);

/// Histogram of letter occurrences over the 26-letter alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyProfile {
    counts: [u64; ALPHABET_LEN],
}

impl Default for FrequencyProfile {
    fn default() -> Self {
        Self::from_counts([0; ALPHABET_LEN])
    }
}

impl FrequencyProfile {
    /// Wrap raw bucket counts (index 0 = 'a')
    pub const fn from_counts(counts: [u64; ALPHABET_LEN]) -> Self {
        Self { counts }
    }

    /// Count the letters of `text`, case-folded; other characters are skipped
    pub fn build(text: &str) -> Self {
        let mut counts = [0u64; ALPHABET_LEN];
        for (index, _) in text.chars().filter_map(letter_index) {
            counts[index as usize] += 1;
        }
        Self { counts }
    }

    /// Bucket counts in alphabet order
    pub fn counts(&self) -> &[u64; ALPHABET_LEN] {
        &self.counts
    }

    /// Count for one bucket
    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// Number of letters counted, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Profile of the text after decoding with `shift`
    ///
    /// Bucket `i` of the result is bucket `(i + shift) mod 26` of `self`, which
    /// equals `build(caesar(text, -shift))` without touching the text again.
    pub fn rotated(&self, shift: u8) -> Self {
        let shift = shift as usize % ALPHABET_LEN;
        let mut counts = [0u64; ALPHABET_LEN];
        for (i, slot) in counts.iter_mut().enumerate() {
            *slot = self.counts[(i + shift) % ALPHABET_LEN];
        }
        Self { counts }
    }

    /// Persisted form: exactly 26 entries labelled "0".."25"
    ///
    /// # Errors
    /// `MalformedProfile` if a bucket exceeds [`MAX_BUCKET_COUNT`]; such a
    /// model could not be loaded back.
    pub fn to_map(&self) -> Result<ProfileMap> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| -> Result<(String, i64)> {
                let count = u32::try_from(count).map_err(|_| {
                    CipherError::MalformedProfile(format!(
                        "bucket {} count {} exceeds {}",
                        i, count, MAX_BUCKET_COUNT
                    ))
                })?;
                Ok((i.to_string(), i64::from(count)))
            })
            .collect()
    }

    /// Parse the persisted form
    ///
    /// # Errors
    /// `MalformedProfile` if any of the labels "0".."25" is missing, a label is
    /// not one of them, or a count is negative or above [`MAX_BUCKET_COUNT`].
    pub fn from_map(map: &ProfileMap) -> Result<Self> {
        let mut counts = [0u64; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        for (label, &value) in map {
            let index = bucket_index(label).ok_or_else(|| {
                CipherError::MalformedProfile(format!("unknown bucket label {:?}", label))
            })?;
            if value < 0 {
                return Err(CipherError::MalformedProfile(format!(
                    "bucket {} has negative count {}",
                    label, value
                )));
            }
            counts[index] = u32::try_from(value).map(u64::from).map_err(|_| {
                CipherError::MalformedProfile(format!(
                    "bucket {} count {} exceeds {}",
                    label, value, MAX_BUCKET_COUNT
                ))
            })?;
            seen[index] = true;
        }

        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(CipherError::MalformedProfile(format!(
                "bucket {} is missing",
                missing
            )));
        }

        Ok(Self { counts })
    }
}

/// Canonical labels only: "7" is bucket 7, "07" is rejected
fn bucket_index(label: &str) -> Option<usize> {
    let index: usize = label.parse().ok()?;
    (index < ALPHABET_LEN && index.to_string() == label).then_some(index)
}

/// Build the frequency profile of `text`
pub fn build_profile(text: &str) -> FrequencyProfile {
    FrequencyProfile::build(text)
}

/// Train a reference profile from a corpus, in persisted form
///
/// # Errors
/// `MalformedProfile` if the corpus holds more than [`MAX_BUCKET_COUNT`] of
/// one letter.
pub fn train_profile(text: &str) -> Result<ProfileMap> {
    let profile = FrequencyProfile::build(text);
    tracing::info!(letters = profile.total(), "trained frequency profile");
    profile.to_map()
}
