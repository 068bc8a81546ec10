//! Fixed-dimension phonological feature vectors.

/// Number of articulatory features per symbol.
pub const FEATURE_COUNT: usize = 24;

/// Feature names in payload order, matching the exporter that produced the
/// bundled table. Kept for diagnostics; scoring never consults names.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "syl", "son", "cons", "cont", "delrel", "lat", "nas", "strid", "voi",
    "sg", "cg", "ant", "cor", "distr", "lab", "hi", "lo", "back", "round",
    "velaric", "tense", "long", "hitone", "hireg",
];

/// One trit per feature: -1, 0, or +1.
pub type FeatureVector = [i8; FEATURE_COUNT];

/// Reserved vector for symbols missing from the table. All zeros, so two
/// distinct unknown symbols still compare numerically instead of erroring,
/// and any unknown scores far from any fully specified known symbol.
pub const UNKNOWN_VECTOR: FeatureVector = [0; FEATURE_COUNT];

/// Normalized distance between two vectors, scaled into [0, 1].
///
/// Each dimension differs by at most 2, so the sum of absolute differences
/// is divided by `FEATURE_COUNT * 2`.
pub fn feature_distance(a: &FeatureVector, b: &FeatureVector) -> f32 {
    let total: i32 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as i32 - y as i32).abs())
        .sum();
    total as f32 / (FEATURE_COUNT as f32 * 2.0)
}
