//! Phonological feature table and IPA segmentation for Parlance
//!
//! This crate holds the leaf data the rest of the pipeline is built on: a
//! fixed-dimension articulatory feature vector per IPA symbol, decoded once
//! at startup from a compact versioned document, plus the segmentation logic
//! that turns a raw IPA string into logical symbols (base letter together
//! with its diacritics, length marks, and tie-bar partner).

pub mod error;
pub mod features;
pub mod segment;
pub mod table;

pub use error::PhonologyError;
pub use features::{feature_distance, FeatureVector, FEATURE_COUNT, UNKNOWN_VECTOR};
pub use segment::{segment, segment_words, SegmentedIpa};
pub use table::FeatureTable;
