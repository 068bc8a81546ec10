use thiserror::Error;

/// Contract and load errors for the decode layer.
///
/// Malformed *runtime* input (empty matrices, out-of-range ids) never lands
/// here — those degrade to sentinels. These variants mean either a caller
/// bug or an unloadable vocabulary file.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("score buffer holds {found} values, expected {expected} ({frames} frames x {vocab_size} entries)")]
    ShapeMismatch {
        expected: usize,
        found: usize,
        frames: usize,
        vocab_size: usize,
    },

    #[error("row {row} holds {found} scores, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("minimum confidence must be a finite, non-negative number, got {value}")]
    InvalidThreshold { value: f32 },

    #[error("malformed token line {line:?}: id is not an integer")]
    InvalidTokenLine { line: String },

    #[error("duplicate token id {id} in vocabulary file")]
    DuplicateTokenId { id: usize },
}
