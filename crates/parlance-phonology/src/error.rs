use thiserror::Error;

use crate::features::FEATURE_COUNT;
use crate::table::TABLE_FORMAT_VERSION;

/// Errors raised while decoding a feature table document.
///
/// All of these are fatal at load time: a table that fails to decode must
/// abort initialization rather than leave every comparison silently scoring
/// against an empty table.
#[derive(Debug, Error)]
pub enum PhonologyError {
    #[error("feature table document is not valid JSON: {0}")]
    Document(#[from] serde_json::Error),

    #[error("feature payload is not valid base64: {0}")]
    Payload(#[from] base64::DecodeError),

    #[error("unsupported feature table version {found} (supported: {})", TABLE_FORMAT_VERSION)]
    UnsupportedVersion { found: u32 },

    #[error("table declares {found} features per symbol (expected {})", FEATURE_COUNT)]
    FeatureCountMismatch { found: usize },

    #[error("feature payload holds {found} bytes, expected {expected}")]
    PayloadLength { expected: usize, found: usize },

    #[error("duplicate symbol in feature table: {symbol:?}")]
    DuplicateSymbol { symbol: String },
}
