//! Per-timestep score matrix as produced by the acoustic model.

use crate::error::DecodeError;

/// Row-major `[frames, vocab_size]` score matrix. Ephemeral: owned by one
/// decode call, never shared or mutated.
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    scores: Vec<f32>,
    frames: usize,
    vocab_size: usize,
}

impl ScoreMatrix {
    /// Wrap a flat row-major buffer. The buffer length must equal
    /// `frames * vocab_size`; anything else is a caller bug.
    pub fn new(scores: Vec<f32>, frames: usize, vocab_size: usize) -> Result<Self, DecodeError> {
        let expected = frames * vocab_size;
        if scores.len() != expected {
            return Err(DecodeError::ShapeMismatch {
                expected,
                found: scores.len(),
                frames,
                vocab_size,
            });
        }
        Ok(Self {
            scores,
            frames,
            vocab_size,
        })
    }

    /// Build from per-frame rows; all rows must have the same width.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, DecodeError> {
        let frames = rows.len();
        let vocab_size = rows.first().map_or(0, Vec::len);
        let mut scores = Vec::with_capacity(frames * vocab_size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != vocab_size {
                return Err(DecodeError::RaggedRow {
                    row,
                    expected: vocab_size,
                    found: values.len(),
                });
            }
            scores.extend(values);
        }
        Self::new(scores, frames, vocab_size)
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Scores for frame `t`.
    pub fn row(&self, t: usize) -> &[f32] {
        let start = t * self.vocab_size;
        &self.scores[start..start + self.vocab_size]
    }

    pub fn is_empty(&self) -> bool {
        self.frames == 0 || self.vocab_size == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = ScoreMatrix::new(vec![0.0; 5], 2, 3).unwrap_err();
        assert!(matches!(err, DecodeError::ShapeMismatch { expected: 6, .. }));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = ScoreMatrix::from_rows(vec![vec![0.0, 1.0], vec![0.0]]).unwrap_err();
        assert!(matches!(err, DecodeError::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn zero_frames_is_a_valid_empty_matrix() {
        let m = ScoreMatrix::new(Vec::new(), 0, 4).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.frames(), 0);
    }

    #[test]
    fn rows_round_trip() {
        let m = ScoreMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }
}
