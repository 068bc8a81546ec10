//! The streaming detector session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use parlance_align::{Aligner, ComparisonResult};
use parlance_decode::{decode, ScoreMatrix, Vocabulary};
use parlance_phonology::{segment_words, FeatureTable};

use crate::config::DetectorConfig;
use crate::error::{InferenceError, StreamError};
use crate::silence::SilenceTracker;
use crate::types::{DetectorEvent, DetectorMetrics, DetectorState};
use crate::ScoreSource;

struct SessionState {
    phase: DetectorState,
    buffer: Vec<i16>,
    chunks: usize,
    silence: SilenceTracker,
    aligner: Aligner,
    last_result: Option<ComparisonResult>,
}

struct Inner {
    config: DetectorConfig,
    target: Vec<String>,
    word_starts: Vec<usize>,
    source: Arc<dyn ScoreSource>,
    vocab: Arc<Vocabulary>,
    state: Mutex<SessionState>,
    /// Bumped on every resolution or cancellation. Decode passes capture the
    /// generation at spawn; a completion whose generation no longer matches
    /// is stale and must be discarded.
    generation: AtomicU64,
    events: mpsc::UnboundedSender<DetectorEvent>,
    metrics: RwLock<DetectorMetrics>,
    runtime: tokio::runtime::Handle,
}

/// One active recording session.
///
/// Owns its buffer and timer state exclusively; the feature table and
/// vocabulary are injected read-only handles shared across sessions.
/// `add_chunk` may be called from any thread (audio callbacks included);
/// decode passes run on the tokio runtime captured at construction.
pub struct StreamingDetector {
    inner: Arc<Inner>,
}

impl StreamingDetector {
    /// Start a session against a raw target IPA string (delimiters and
    /// stress marks are stripped, symbols segmented, word starts recorded).
    ///
    /// Must be called within a tokio runtime. Returns the detector plus the
    /// receiving end of its event channel.
    pub fn new(
        config: DetectorConfig,
        target_ipa: &str,
        source: Arc<dyn ScoreSource>,
        vocab: Arc<Vocabulary>,
        table: Arc<FeatureTable>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<DetectorEvent>), StreamError> {
        config.validate()?;
        let segmented = segment_words(target_ipa);
        let (events, events_rx) = mpsc::unbounded_channel();

        let silence = SilenceTracker::new(
            config.silence_threshold,
            config.silence_duration_ms,
            config.sample_rate_hz,
        );
        let inner = Arc::new(Inner {
            target: segmented.symbols,
            word_starts: segmented.word_starts,
            source,
            vocab,
            state: Mutex::new(SessionState {
                phase: DetectorState::Idle,
                buffer: Vec::new(),
                chunks: 0,
                silence,
                aligner: Aligner::new(table),
                last_result: None,
            }),
            generation: AtomicU64::new(0),
            events,
            metrics: RwLock::new(DetectorMetrics::default()),
            runtime: tokio::runtime::Handle::current(),
            config,
        });

        info!(
            target: "stream",
            target_len = inner.target.len(),
            threshold = inner.config.threshold,
            "session started"
        );
        Ok((Self { inner }, events_rx))
    }

    /// Feed one audio chunk.
    ///
    /// The silence timer always updates first (cheap, synchronous). If the
    /// session is resolved, or a decode pass is already in flight, this
    /// returns right after that check — new audio is still appended while a
    /// pass runs, but a second concurrent pass never starts.
    pub fn add_chunk(&self, chunk: &[i16]) {
        let inner = &self.inner;
        inner.metrics.write().chunks_in += 1;

        let mut state = inner.state.lock();
        if state.phase.is_terminal() {
            return;
        }

        if state.silence.observe(chunk) {
            state.phase = DetectorState::SilenceStopped;
            inner.generation.fetch_add(1, Ordering::SeqCst);
            drop(state);
            info!(target: "stream", "silence stop");
            inner.send(DetectorEvent::SilenceStopped);
            return;
        }

        state.buffer.extend_from_slice(chunk);
        state.chunks += 1;
        if state.phase == DetectorState::Idle {
            state.phase = DetectorState::Accumulating;
        }
        if state.phase != DetectorState::Accumulating {
            return; // a pass is in flight; keep accumulating only
        }
        if state.chunks < inner.config.min_chunks_before_check {
            return;
        }

        state.phase = DetectorState::Decoding;
        let snapshot = state.buffer.clone();
        let generation = inner.generation.load(Ordering::SeqCst);
        drop(state);

        inner.metrics.write().passes_started += 1;
        debug!(
            target: "stream",
            samples = snapshot.len(),
            generation,
            "decode pass started"
        );

        let task = Arc::clone(inner);
        inner.runtime.spawn(async move {
            let outcome = task.source.infer(&snapshot).await;
            task.complete_pass(generation, outcome);
        });
    }

    /// Discard the session. Any in-flight pass result is ignored when it
    /// later resolves; no event fires for a cancelled session.
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        if state.phase.is_terminal() {
            return;
        }
        state.phase = DetectorState::Cancelled;
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        debug!(target: "stream", "session cancelled");
    }

    pub fn state(&self) -> DetectorState {
        self.inner.state.lock().phase
    }

    /// Result of the most recently applied decode pass, if any.
    pub fn last_result(&self) -> Option<ComparisonResult> {
        self.inner.state.lock().last_result.clone()
    }

    pub fn metrics(&self) -> DetectorMetrics {
        self.inner.metrics.read().clone()
    }

    /// The segmented target pronunciation this session listens for.
    pub fn target(&self) -> &[String] {
        &self.inner.target
    }
}

impl Inner {
    fn complete_pass(&self, generation: u64, outcome: Result<ScoreMatrix, InferenceError>) {
        let mut state = self.state.lock();
        let stale = self.generation.load(Ordering::SeqCst) != generation
            || state.phase != DetectorState::Decoding;
        if stale {
            self.metrics.write().passes_discarded += 1;
            debug!(target: "stream", generation, "stale decode pass discarded");
            return;
        }

        let matrix = match outcome {
            Ok(matrix) => matrix,
            Err(err) => {
                state.phase = DetectorState::Accumulating;
                self.metrics.write().decode_failures += 1;
                warn!(target: "stream", error = %err, "decode pass failed; still listening");
                drop(state);
                self.send(DetectorEvent::DecodeFailed {
                    message: err.to_string(),
                });
                return;
            }
        };

        let actual: Vec<String> = match decode(&matrix, &self.vocab, &self.config.decode) {
            Ok(phonemes) => phonemes.into_iter().map(|p| p.symbol).collect(),
            Err(err) => {
                // Options were validated at construction, so this is about
                // as unreachable as it gets; treat it like a failed pass.
                state.phase = DetectorState::Accumulating;
                self.metrics.write().decode_failures += 1;
                warn!(target: "stream", error = %err, "decode rejected matrix");
                drop(state);
                self.send(DetectorEvent::DecodeFailed {
                    message: err.to_string(),
                });
                return;
            }
        };

        let result = state
            .aligner
            .compare_annotated(&self.target, &actual, &self.word_starts);
        self.metrics.write().passes_completed += 1;
        debug!(
            target: "stream",
            similarity = result.similarity,
            actual_len = actual.len(),
            "decode pass complete"
        );

        if result.similarity >= self.config.threshold {
            state.phase = DetectorState::Matched;
            self.generation.fetch_add(1, Ordering::SeqCst);
            state.last_result = Some(result.clone());
            drop(state);
            info!(target: "stream", similarity = result.similarity, "target matched");
            self.send(DetectorEvent::Matched { result });
        } else {
            state.last_result = Some(result);
            state.phase = DetectorState::Accumulating;
        }
    }

    fn send(&self, event: DetectorEvent) {
        if self.events.send(event).is_err() {
            debug!(target: "stream", "event receiver dropped");
        }
    }
}
