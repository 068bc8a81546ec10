//! Streaming pronunciation detector for Parlance
//!
//! Runs the decode-and-compare pipeline incrementally against a growing
//! audio buffer so recording can stop automatically: on a match against the
//! target pronunciation, or on sustained silence. Decode passes are
//! serialized — never more than one in flight per session — while chunks
//! keep accumulating, and a generation counter guarantees that stale pass
//! results from a resolved or cancelled session are discarded.

pub mod config;
pub mod detector;
pub mod energy;
pub mod error;
pub mod silence;
pub mod types;

use async_trait::async_trait;

use parlance_decode::ScoreMatrix;

pub use config::DetectorConfig;
pub use detector::StreamingDetector;
pub use error::{InferenceError, StreamError};
pub use silence::SilenceTracker;
pub use types::{DetectorEvent, DetectorMetrics, DetectorState};

/// The external acoustic model behind one documented contract: PCM in,
/// named score matrix out. Implementations wrap whatever inference stack is
/// in use; the detector only consumes the numeric output.
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Run inference over 16 kHz mono S16LE PCM and return per-timestep,
    /// per-vocabulary-entry scores.
    async fn infer(&self, audio: &[i16]) -> Result<ScoreMatrix, InferenceError>;
}
