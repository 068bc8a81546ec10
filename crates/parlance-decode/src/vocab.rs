//! Model vocabulary: output id to phonetic symbol, with marker tokens.

use crate::error::DecodeError;

/// Sentinel symbol for ids outside the vocabulary. Bracketed on purpose so
/// the marker convention classifies it as a non-phoneme and decoding drops
/// it instead of surfacing a phantom phoneme.
pub const UNKNOWN_SYMBOL: &str = "<unk>";

/// Immutable id-to-symbol mapping.
///
/// Non-phoneme marker entries (blank/padding/special tokens) are recognized
/// by naming convention: the word separator `▁` and any `<...>`-bracketed
/// name such as `<blk>` or `<sos/eos>`.
#[derive(Debug)]
pub struct Vocabulary {
    symbols: Vec<String>,
    markers: Vec<bool>,
}

impl Vocabulary {
    /// Build a vocabulary from symbols in id order.
    pub fn new(symbols: Vec<String>) -> Self {
        let markers = symbols.iter().map(|s| Self::is_marker_symbol(s)).collect();
        Self { symbols, markers }
    }

    /// Parse the `tokens.txt` format: one `symbol [id]` pair per line, the
    /// id defaulting to the running index. Blank lines are skipped. Gaps in
    /// the id space are filled with [`UNKNOWN_SYMBOL`]; duplicate ids are
    /// rejected loudly.
    pub fn from_tokens_text(text: &str) -> Result<Self, DecodeError> {
        let mut entries: Vec<(usize, String)> = Vec::new();
        for line in text.lines() {
            let mut parts = line.split_whitespace();
            let Some(symbol) = parts.next() else { continue };
            let id = match parts.next() {
                Some(raw) => raw.parse().map_err(|_| DecodeError::InvalidTokenLine {
                    line: line.to_string(),
                })?,
                None => entries.len(),
            };
            entries.push((id, symbol.to_string()));
        }

        let size = entries.iter().map(|(id, _)| id + 1).max().unwrap_or(0);
        let mut symbols = vec![UNKNOWN_SYMBOL.to_string(); size];
        let mut seen = vec![false; size];
        for (id, symbol) in entries {
            if seen[id] {
                return Err(DecodeError::DuplicateTokenId { id });
            }
            seen[id] = true;
            symbols[id] = symbol;
        }
        Ok(Self::new(symbols))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol for `id`, if in range.
    pub fn symbol(&self, id: usize) -> Option<&str> {
        self.symbols.get(id).map(String::as_str)
    }

    /// Symbol for `id`, falling back to [`UNKNOWN_SYMBOL`] out of range.
    pub fn symbol_or_unknown(&self, id: usize) -> &str {
        self.symbol(id).unwrap_or(UNKNOWN_SYMBOL)
    }

    /// Whether `id` names a non-phoneme marker. Out-of-range ids count as
    /// markers, matching the unknown sentinel.
    pub fn is_marker_id(&self, id: usize) -> bool {
        self.markers.get(id).copied().unwrap_or(true)
    }

    pub fn is_marker_symbol(symbol: &str) -> bool {
        symbol == "▁" || (symbol.starts_with('<') && symbol.ends_with('>'))
    }
}
