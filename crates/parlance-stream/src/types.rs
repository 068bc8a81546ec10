//! Session states, events, and metrics.

use parlance_align::ComparisonResult;

/// Lifecycle of one streaming session.
///
/// `Idle` until the first chunk; `Accumulating` while buffering;
/// `Decoding` while one pass is in flight (chunks still accumulate);
/// the remaining three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    Idle,
    Accumulating,
    Decoding,
    Matched,
    SilenceStopped,
    Cancelled,
}

impl DetectorState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DetectorState::Matched | DetectorState::SilenceStopped | DetectorState::Cancelled
        )
    }
}

/// Events emitted by a session. `Matched` and `SilenceStopped` are terminal
/// and mutually exclusive: at most one of them fires, exactly once.
/// `DecodeFailed` is informational; the session keeps listening.
#[derive(Debug, Clone)]
pub enum DetectorEvent {
    Matched { result: ComparisonResult },
    SilenceStopped,
    DecodeFailed { message: String },
}

/// Counters for one session.
#[derive(Debug, Clone, Default)]
pub struct DetectorMetrics {
    pub chunks_in: u64,
    pub passes_started: u64,
    pub passes_completed: u64,
    /// Passes whose result arrived after the session resolved or was
    /// cancelled, and was therefore ignored.
    pub passes_discarded: u64,
    pub decode_failures: u64,
}
