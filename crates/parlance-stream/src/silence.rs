//! Chunk-driven silence tracking.

use tracing::trace;

use crate::energy;

/// Accumulates the duration of consecutive below-floor chunks. Time advances
/// by chunk length over the sample rate, never by wall clock, so behavior is
/// deterministic under test and indifferent to capture jitter.
pub struct SilenceTracker {
    floor: f32,
    required_ms: u64,
    sample_rate_hz: u32,
    quiet_ms: f64,
    tripped: bool,
}

impl SilenceTracker {
    pub fn new(floor: f32, required_ms: u64, sample_rate_hz: u32) -> Self {
        Self {
            floor,
            required_ms,
            sample_rate_hz,
            quiet_ms: 0.0,
            tripped: false,
        }
    }

    /// Feed one chunk. Returns true exactly once: on the chunk whose quiet
    /// time crosses the required duration. A chunk at or above the floor
    /// resets the accumulated quiet time.
    pub fn observe(&mut self, chunk: &[i16]) -> bool {
        let level = energy::rms(chunk);
        if level >= self.floor {
            self.quiet_ms = 0.0;
            return false;
        }

        self.quiet_ms += chunk.len() as f64 * 1000.0 / self.sample_rate_hz as f64;
        trace!(
            target: "stream",
            level,
            dbfs = energy::rms_to_dbfs(level),
            quiet_ms = self.quiet_ms,
            "silent chunk"
        );
        if !self.tripped && self.quiet_ms >= self.required_ms as f64 {
            self.tripped = true;
            return true;
        }
        false
    }

    /// Accumulated quiet time, in milliseconds.
    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms as u64
    }

    pub fn reset(&mut self) {
        self.quiet_ms = 0.0;
        self.tripped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 16_000;

    fn quiet() -> Vec<i16> {
        vec![0i16; 1600] // 100 ms
    }

    fn loud() -> Vec<i16> {
        vec![8000i16; 1600]
    }

    #[test]
    fn trips_once_when_duration_crosses() {
        let mut tracker = SilenceTracker::new(0.0125, 250, RATE);
        assert!(!tracker.observe(&quiet()));
        assert!(!tracker.observe(&quiet()));
        assert!(tracker.observe(&quiet())); // 300 ms >= 250 ms
        assert!(!tracker.observe(&quiet())); // already tripped
    }

    #[test]
    fn loud_chunk_resets_the_clock() {
        let mut tracker = SilenceTracker::new(0.0125, 250, RATE);
        tracker.observe(&quiet());
        tracker.observe(&quiet());
        assert!(!tracker.observe(&loud()));
        assert_eq!(tracker.quiet_ms(), 0);
        assert!(!tracker.observe(&quiet()));
        assert!(!tracker.observe(&quiet()));
        assert!(tracker.observe(&quiet()));
    }

    #[test]
    fn reset_rearms_the_tracker() {
        let mut tracker = SilenceTracker::new(0.0125, 100, RATE);
        assert!(tracker.observe(&quiet()));
        tracker.reset();
        assert!(tracker.observe(&quiet()));
    }

    #[test]
    fn empty_chunk_adds_no_time() {
        let mut tracker = SilenceTracker::new(0.0125, 100, RATE);
        assert!(!tracker.observe(&[]));
        assert_eq!(tracker.quiet_ms(), 0);
    }
}
