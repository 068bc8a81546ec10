use thiserror::Error;

/// Construction-time contract errors. These mean a caller bug, not a
/// runtime condition to recover from.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("match threshold must be within [0, 1], got {value}")]
    InvalidThreshold { value: f32 },

    #[error("silence floor must be a finite, non-negative RMS value, got {value}")]
    InvalidSilenceFloor { value: f32 },

    #[error("minimum decode confidence must be finite and non-negative, got {value}")]
    InvalidMinConfidence { value: f32 },

    #[error("sample rate must be positive")]
    InvalidSampleRate,

    #[error("silence duration must be positive")]
    InvalidSilenceDuration,
}

/// A transient failure of the external inference call. Recoverable: the
/// detector reports it and keeps listening.
#[derive(Debug, Clone, Error)]
#[error("inference failed: {message}")]
pub struct InferenceError {
    pub message: String,
}

impl InferenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
