//! Dynamic-programming alignment with full backtrace.

use std::sync::Arc;

use tracing::debug;

use parlance_phonology::FeatureTable;

use crate::cost::{substitution_cost, INDEL_COST};
use crate::types::{AlignmentItem, ComparisonResult};

/// Alignment engine. Owns its DP buffer so repeated comparisons (the
/// streaming path re-scores on every decode pass) do not reallocate.
pub struct Aligner {
    table: Arc<FeatureTable>,
    /// Reserved for per-language cost tuning; costs are currently
    /// locale-independent.
    locale: Option<String>,
    dp: Vec<f32>,
}

impl Aligner {
    pub fn new(table: Arc<FeatureTable>) -> Self {
        Self {
            table,
            locale: None,
            dp: Vec::new(),
        }
    }

    pub fn with_locale(table: Arc<FeatureTable>, locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..Self::new(table)
        }
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Compare without word-boundary annotation.
    pub fn compare(&mut self, target: &[String], actual: &[String]) -> ComparisonResult {
        self.compare_annotated(target, actual, &[])
    }

    /// Compare `actual` against `target`, marking the alignment steps that
    /// consume the first phoneme of each target word. `word_starts` holds
    /// target indices; out-of-range entries are ignored (annotation only).
    pub fn compare_annotated(
        &mut self,
        target: &[String],
        actual: &[String],
        word_starts: &[usize],
    ) -> ComparisonResult {
        let m = target.len();
        let n = actual.len();
        let width = n + 1;

        self.dp.clear();
        self.dp.resize((m + 1) * width, 0.0);
        for j in 1..=n {
            self.dp[j] = j as f32 * INDEL_COST;
        }
        for i in 1..=m {
            self.dp[i * width] = i as f32 * INDEL_COST;
        }
        for i in 1..=m {
            for j in 1..=n {
                let sub = substitution_cost(&self.table, &target[i - 1], &actual[j - 1]);
                let diagonal = self.dp[(i - 1) * width + (j - 1)] + sub;
                let deletion = self.dp[(i - 1) * width + j] + INDEL_COST;
                let insertion = self.dp[i * width + (j - 1)] + INDEL_COST;
                self.dp[i * width + j] = diagonal.min(deletion).min(insertion);
            }
        }

        let alignment = self.backtrace(target, actual, word_starts, width);

        let total = self.dp[m * width + n];
        let longest = m.max(n);
        let distance = if longest == 0 {
            0.0
        } else {
            total / longest as f32
        };
        let similarity = (1.0 - distance).clamp(0.0, 1.0);

        debug!(
            target: "align",
            target_len = m,
            actual_len = n,
            similarity,
            "comparison complete"
        );

        ComparisonResult {
            distance,
            similarity,
            alignment,
            target: target.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Walk from the bottom-right cell to the origin, emitting one item per
    /// step. When costs tie, prefer the diagonal, then deletion, then
    /// insertion, for deterministic output.
    fn backtrace(
        &self,
        target: &[String],
        actual: &[String],
        word_starts: &[usize],
        width: usize,
    ) -> Vec<AlignmentItem> {
        let mut items = Vec::with_capacity(target.len().max(actual.len()));
        let mut i = target.len();
        let mut j = actual.len();

        while i > 0 || j > 0 {
            let here = self.dp[i * width + j];
            if i > 0 && j > 0 {
                let sub = substitution_cost(&self.table, &target[i - 1], &actual[j - 1]);
                if self.dp[(i - 1) * width + (j - 1)] + sub == here {
                    items.push(AlignmentItem {
                        target: Some(target[i - 1].clone()),
                        actual: Some(actual[j - 1].clone()),
                        cost: sub,
                        is_match: target[i - 1] == actual[j - 1],
                        word_boundary: word_starts.contains(&(i - 1)),
                    });
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }
            if i > 0 && self.dp[(i - 1) * width + j] + INDEL_COST == here {
                items.push(AlignmentItem {
                    target: Some(target[i - 1].clone()),
                    actual: None,
                    cost: INDEL_COST,
                    is_match: false,
                    word_boundary: word_starts.contains(&(i - 1)),
                });
                i -= 1;
                continue;
            }
            items.push(AlignmentItem {
                target: None,
                actual: Some(actual[j - 1].clone()),
                cost: INDEL_COST,
                is_match: false,
                word_boundary: false,
            });
            j -= 1;
        }

        items.reverse();
        items
    }
}
