//! Caesar key recovery by frequency analysis
//!
//! Scores all 26 candidate shifts by comparing the rotated cipher-text profile
//! against a reference profile and keeps the lowest score. Ties go to the
//! smallest shift.
//!
//! Two scoring conventions are available:
//!
//! - [`Scoring::Normalized`] (default): L1 distance between the two profiles
//!   after cross-multiplying each count by the other profile's letter total.
//!   This compares letter ratios, so a short cipher text is not penalized for
//!   being shorter than the reference corpus.
//! - [`Scoring::Raw`]: L1 distance between raw counts. Biased toward whichever
//!   text is larger; kept for compatibility with models tuned against it.

use crate::alphabet::ALPHABET_LEN;
use crate::cipher::caesar;
use crate::error::Result;
use crate::profile::{FrequencyProfile, ProfileMap};
use serde::{Deserialize, Serialize};

/// Profile comparison convention used when scoring candidate shifts
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Scoring {
    /// Compare letter ratios (cross-multiplied counts)
    #[default]
    Normalized,
    /// Compare raw counts
    Raw,
}

/// Outcome of a key recovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// Shift the cipher text was encrypted with
    pub shift: u8,
    /// Cipher text decoded with `shift`
    pub plaintext: String,
    /// Score of the winning shift (lower is better)
    pub score: u128,
}

/// Raw L1 distance between two profiles, saturating at `u64::MAX`
pub fn score_difference(candidate: &FrequencyProfile, reference: &FrequencyProfile) -> u64 {
    candidate
        .counts()
        .iter()
        .zip(reference.counts())
        .fold(0u64, |acc, (&c, &r)| acc.saturating_add(c.abs_diff(r)))
}

/// Length-invariant L1 distance, saturating at `u128::MAX`
///
/// `Σ |candidate[i] * total(reference) - reference[i] * total(candidate)|`
///
/// Never saturates for a reference loaded through
/// [`FrequencyProfile::from_map`], whose buckets are capped at
/// [`MAX_BUCKET_COUNT`](crate::profile::MAX_BUCKET_COUNT).
pub fn score_normalized(candidate: &FrequencyProfile, reference: &FrequencyProfile) -> u128 {
    let candidate_total = candidate.total() as u128;
    let reference_total = reference.total() as u128;

    candidate
        .counts()
        .iter()
        .zip(reference.counts())
        .fold(0u128, |acc, (&c, &r)| {
            let scaled_candidate = (c as u128).saturating_mul(reference_total);
            let scaled_reference = (r as u128).saturating_mul(candidate_total);
            acc.saturating_add(scaled_candidate.abs_diff(scaled_reference))
        })
}

impl Scoring {
    /// Score `candidate` against `reference` under this convention
    pub fn score(self, candidate: &FrequencyProfile, reference: &FrequencyProfile) -> u128 {
        match self {
            Scoring::Normalized => score_normalized(candidate, reference),
            Scoring::Raw => score_difference(candidate, reference) as u128,
        }
    }
}

/// Find the Caesar shift whose decoding best matches `reference`, using the
/// default scoring convention
pub fn recover_caesar_shift(cipher_text: &str, reference: &FrequencyProfile) -> Recovery {
    recover_caesar_shift_with(cipher_text, reference, Scoring::default())
}

/// Find the Caesar shift whose decoding best matches `reference`
///
/// Text without letters scores the same under every shift and comes back
/// unchanged with shift 0.
pub fn recover_caesar_shift_with(
    cipher_text: &str,
    reference: &FrequencyProfile,
    scoring: Scoring,
) -> Recovery {
    let cipher_profile = FrequencyProfile::build(cipher_text);

    let mut best: Option<(u8, u128)> = None;

    for shift in 0..ALPHABET_LEN as u8 {
        let candidate = cipher_profile.rotated(shift);
        let score = scoring.score(&candidate, reference);
        tracing::trace!(shift, score, "scored candidate shift");

        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((shift, score));
        }
    }

    let (best_shift, best_score) = best.unwrap_or((0, 0));

    tracing::debug!(
        shift = best_shift,
        score = best_score,
        letters = cipher_profile.total(),
        ?scoring,
        "recovered caesar shift"
    );

    Recovery {
        shift: best_shift,
        plaintext: caesar(cipher_text, -(best_shift as i64)),
        score: best_score,
    }
}

/// Recover the plaintext of a Caesar cipher text against a persisted reference
///
/// # Errors
/// `MalformedProfile` if `reference` is not a valid 26-bucket profile map.
pub fn hack(text: &str, reference: &ProfileMap) -> Result<String> {
    hack_with(text, reference, Scoring::default())
}

/// [`hack`] with an explicit scoring convention
pub fn hack_with(text: &str, reference: &ProfileMap, scoring: Scoring) -> Result<String> {
    let reference = FrequencyProfile::from_map(reference)?;
    Ok(recover_caesar_shift_with(text, &reference, scoring).plaintext)
}
