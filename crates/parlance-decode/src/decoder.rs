//! Greedy temporal decoding.
//!
//! Per timestep, the vocabulary entry with the highest score wins (ties go
//! to the lowest id for determinism). Consecutive wins of the same id merge
//! into one phoneme whose duration is the run length and whose confidence is
//! the maximum `exp(score)` over the run. Marker tokens never emit, and a
//! marker run between two identical symbols keeps their runs separate —
//! standard temporal-classification blank handling.

use tracing::trace;

use crate::error::DecodeError;
use crate::matrix::ScoreMatrix;
use crate::types::{DecodeOptions, DecodedPhoneme};
use crate::vocab::Vocabulary;

struct Run {
    id: usize,
    confidence: f32,
    duration: u32,
}

fn best_entry(row: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (id, &score) in row.iter().enumerate() {
        match best {
            Some((_, s)) if score <= s => {}
            _ => best = Some((id, score)),
        }
    }
    best
}

fn flush(run: Option<Run>, vocab: &Vocabulary, min_confidence: f32, out: &mut Vec<DecodedPhoneme>) {
    let Some(run) = run else { return };
    if vocab.is_marker_id(run.id) {
        return;
    }
    if run.confidence < min_confidence {
        trace!(
            target: "decode",
            symbol = vocab.symbol_or_unknown(run.id),
            confidence = run.confidence,
            "dropped low-confidence phoneme"
        );
        return;
    }
    out.push(DecodedPhoneme {
        symbol: vocab.symbol_or_unknown(run.id).to_string(),
        confidence: run.confidence,
        duration: run.duration,
    });
}

/// Decode a score matrix into the surviving phonemes, in order.
///
/// Pure: no side effects beyond trace logging. An empty or all-marker matrix
/// yields an empty vector, not an error. Returns `Err` only for contract
/// violations (a non-finite or negative confidence floor).
pub fn decode(
    matrix: &ScoreMatrix,
    vocab: &Vocabulary,
    options: &DecodeOptions,
) -> Result<Vec<DecodedPhoneme>, DecodeError> {
    if !options.min_confidence.is_finite() || options.min_confidence < 0.0 {
        return Err(DecodeError::InvalidThreshold {
            value: options.min_confidence,
        });
    }

    let mut out = Vec::new();
    let mut run: Option<Run> = None;

    for t in 0..matrix.frames() {
        let Some((id, score)) = best_entry(matrix.row(t)) else {
            continue;
        };
        let confidence = score.exp();
        trace!(
            target: "decode",
            frame = t,
            id,
            symbol = vocab.symbol_or_unknown(id),
            score,
            "frame winner"
        );
        match run {
            Some(ref mut current) if current.id == id => {
                current.duration += 1;
                if confidence > current.confidence {
                    current.confidence = confidence;
                }
            }
            _ => {
                flush(run.take(), vocab, options.min_confidence, &mut out);
                run = Some(Run {
                    id,
                    confidence,
                    duration: 1,
                });
            }
        }
    }
    flush(run, vocab, options.min_confidence, &mut out);

    Ok(out)
}

/// Decode straight to the canonical "actual IPA" string: the surviving
/// symbols concatenated in order.
pub fn decode_to_ipa(
    matrix: &ScoreMatrix,
    vocab: &Vocabulary,
    options: &DecodeOptions,
) -> Result<String, DecodeError> {
    Ok(decode(matrix, vocab, options)?
        .into_iter()
        .map(|p| p.symbol)
        .collect())
}
