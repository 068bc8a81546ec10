//! Alignment output types.

/// One step of an alignment trace. `target` and `actual` are both present
/// for substitutions/matches; a deletion has only `target`, an insertion
/// only `actual`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentItem {
    pub target: Option<String>,
    pub actual: Option<String>,
    pub cost: f32,
    /// True iff both symbols are present and identical. Near-misses keep
    /// `is_match == false` even though their cost is small.
    pub is_match: bool,
    /// Display annotation: this step consumes the first phoneme of a word
    /// in the target. Never influences cost.
    pub word_boundary: bool,
}

/// The outcome of one comparison. Immutable; owned by the caller.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// Total alignment cost divided by `max(target len, actual len)`.
    pub distance: f32,
    /// `1 - distance`, clamped into [0, 1].
    pub similarity: f32,
    pub alignment: Vec<AlignmentItem>,
    pub target: Vec<String>,
    pub actual: Vec<String>,
}
