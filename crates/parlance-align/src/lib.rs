//! Feature-weighted phoneme alignment and similarity for Parlance
//!
//! Scores how phonetically close an actual phoneme sequence is to a target
//! sequence. Substitution costs come from articulatory feature distance, not
//! plain string edits, so `d` is nearly `t` while `m` is nowhere near `s`.
//! The engine is synchronous, pure, and deterministic.

pub mod cost;
pub mod engine;
pub mod types;

pub use cost::{substitution_cost, INDEL_COST};
pub use engine::Aligner;
pub use types::{AlignmentItem, ComparisonResult};
