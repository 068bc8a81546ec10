//! Immutable symbol-to-feature-vector table.
//!
//! The persisted form is a small JSON document whose `features` field is a
//! base64-encoded array of signed bytes, `featureCount` trits per phoneme in
//! the order of the `phonemes` list. The table is decoded once and shared
//! read-only (typically behind an `Arc`) for the life of the process.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::error::PhonologyError;
use crate::features::{FeatureVector, FEATURE_COUNT, UNKNOWN_VECTOR};

/// Document version this build understands.
pub const TABLE_FORMAT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct TableDocument {
    version: u32,
    #[serde(rename = "featureCount")]
    feature_count: usize,
    phonemes: Vec<String>,
    features: String,
}

/// Lookup from IPA symbol to its feature vector.
///
/// Fully constructed or not at all: every constructor returns either a
/// complete table or an error, so readers never observe partial state.
#[derive(Debug)]
pub struct FeatureTable {
    index: HashMap<String, usize>,
    vectors: Vec<FeatureVector>,
}

impl FeatureTable {
    /// Decode a table from its persisted JSON document.
    pub fn from_document(json: &str) -> Result<Self, PhonologyError> {
        let doc: TableDocument = serde_json::from_str(json)?;
        if doc.version != TABLE_FORMAT_VERSION {
            return Err(PhonologyError::UnsupportedVersion { found: doc.version });
        }
        if doc.feature_count != FEATURE_COUNT {
            return Err(PhonologyError::FeatureCountMismatch {
                found: doc.feature_count,
            });
        }

        let raw = STANDARD.decode(doc.features.as_bytes())?;
        let expected = doc.phonemes.len() * FEATURE_COUNT;
        if raw.len() != expected {
            return Err(PhonologyError::PayloadLength {
                expected,
                found: raw.len(),
            });
        }

        let mut index = HashMap::with_capacity(doc.phonemes.len());
        let mut vectors = Vec::with_capacity(doc.phonemes.len());
        for (i, symbol) in doc.phonemes.into_iter().enumerate() {
            let mut vector: FeatureVector = [0; FEATURE_COUNT];
            for (k, byte) in raw[i * FEATURE_COUNT..(i + 1) * FEATURE_COUNT]
                .iter()
                .enumerate()
            {
                vector[k] = *byte as i8;
            }
            if index.insert(symbol.clone(), vectors.len()).is_some() {
                return Err(PhonologyError::DuplicateSymbol { symbol });
            }
            vectors.push(vector);
        }

        debug!(target: "phonology", symbols = vectors.len(), "feature table decoded");
        Ok(Self { index, vectors })
    }

    /// Decode the table bundled with this crate.
    pub fn bundled() -> Result<Self, PhonologyError> {
        Self::from_document(include_str!("../data/feature_table.json"))
    }

    /// Feature vector for `symbol`, or the reserved unknown vector if the
    /// symbol is not in the table. Never fails.
    pub fn lookup(&self, symbol: &str) -> &FeatureVector {
        match self.index.get(symbol) {
            Some(&i) => &self.vectors[i],
            None => &UNKNOWN_VECTOR,
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_decodes() {
        let table = FeatureTable::bundled().unwrap();
        assert!(table.len() > 50);
        assert!(table.contains("m"));
        assert!(table.contains("oː"));
        assert!(table.contains("t͡ʃ"));
    }

    #[test]
    fn unknown_symbol_maps_to_zero_vector() {
        let table = FeatureTable::bundled().unwrap();
        assert_eq!(table.lookup("☃"), &UNKNOWN_VECTOR);
    }

    #[test]
    fn known_symbol_is_fully_specified() {
        let table = FeatureTable::bundled().unwrap();
        let v = table.lookup("m");
        assert!(v.iter().any(|&t| t != 0));
    }
}
