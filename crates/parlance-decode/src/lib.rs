//! Vocabulary and greedy temporal decoding for Parlance
//!
//! Turns the acoustic model's per-timestep score matrix into a compact,
//! filtered phoneme sequence. Decoding is a pure function: the same matrix,
//! vocabulary, and options always produce the same output, on any thread.

pub mod decoder;
pub mod error;
pub mod matrix;
pub mod types;
pub mod vocab;

pub use decoder::{decode, decode_to_ipa};
pub use error::DecodeError;
pub use matrix::ScoreMatrix;
pub use types::{DecodeOptions, DecodedPhoneme, DEFAULT_MIN_CONFIDENCE};
pub use vocab::{Vocabulary, UNKNOWN_SYMBOL};
