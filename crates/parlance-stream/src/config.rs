use serde::{Deserialize, Serialize};

use parlance_decode::DecodeOptions;

use crate::error::StreamError;

/// Standard sample rate for detector input (Hz).
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Configuration for one streaming session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Similarity at or above which the session resolves to `Matched`.
    /// 1.0 stops only on an exact match; lower values allow an early stop
    /// on a strong partial match.
    pub threshold: f32,
    /// Chunks that must arrive before the first decode pass. Avoids wasted
    /// inference on buffers too short to contain the target.
    pub min_chunks_before_check: usize,
    /// RMS floor (0..1 of full scale) below which a chunk counts as silence.
    pub silence_threshold: f32,
    /// Consecutive below-floor audio that triggers a silence stop (ms).
    pub silence_duration_ms: u64,
    pub sample_rate_hz: u32,
    /// Options forwarded to every decode pass.
    pub decode: DecodeOptions,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            min_chunks_before_check: 3,
            silence_threshold: 0.0125,
            silence_duration_ms: 2000,
            sample_rate_hz: SAMPLE_RATE_HZ,
            decode: DecodeOptions::default(),
        }
    }
}

impl DetectorConfig {
    /// Fail fast on caller bugs before a session starts.
    pub fn validate(&self) -> Result<(), StreamError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(StreamError::InvalidThreshold {
                value: self.threshold,
            });
        }
        if !self.silence_threshold.is_finite() || self.silence_threshold < 0.0 {
            return Err(StreamError::InvalidSilenceFloor {
                value: self.silence_threshold,
            });
        }
        if !self.decode.min_confidence.is_finite() || self.decode.min_confidence < 0.0 {
            return Err(StreamError::InvalidMinConfidence {
                value: self.decode.min_confidence,
            });
        }
        if self.sample_rate_hz == 0 {
            return Err(StreamError::InvalidSampleRate);
        }
        if self.silence_duration_ms == 0 {
            return Err(StreamError::InvalidSilenceDuration);
        }
        Ok(())
    }
}
