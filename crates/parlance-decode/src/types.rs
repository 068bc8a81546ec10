//! Decode output types and options.

use serde::{Deserialize, Serialize};

/// Default confidence floor, tuned against the unnormalized `exp(score)`
/// confidence scale. Retune if the confidence semantics ever change.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.54;

/// One decoded phoneme: the surviving symbol of a merged run of timesteps.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPhoneme {
    pub symbol: String,
    /// Unnormalized confidence magnitude, `exp(raw score)` aggregated as the
    /// maximum over the run. Roughly 0..~10; not a probability.
    pub confidence: f32,
    /// Run length in frames.
    pub duration: u32,
}

/// Options for one decode call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Phonemes whose aggregate confidence falls below this floor are
    /// dropped after merging.
    pub min_confidence: f32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}
