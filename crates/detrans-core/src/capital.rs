//! Lowercase → capital letter lookup for case restoration.
//!
//! The dictionary stores lowercase replacements only. When the source of a
//! match starts with a capital, the first letter of the replacement is swapped
//! for its capital form from this table.

use crate::tables::TablesError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapitalPair {
    pub lower: String,
    pub upper: String,
}

/// Capital pairs sorted by lowercase form, searched by the first letter of a
/// replacement. All letters share one byte width.
#[derive(Debug, Clone)]
pub struct CapitalTable {
    pairs: Vec<CapitalPair>,
    width: usize,
}

impl CapitalTable {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Result<Self, TablesError> {
        let mut pairs: Vec<CapitalPair> = pairs
            .into_iter()
            .map(|(lower, upper)| CapitalPair { lower, upper })
            .collect();
        pairs.sort_by(|a, b| a.lower.as_bytes().cmp(b.lower.as_bytes()));
        pairs.dedup_by(|a, b| a.lower == b.lower);

        let width = pairs.first().map_or(0, |p| p.lower.len());
        for p in &pairs {
            if p.lower.is_empty() {
                return Err(TablesError::EmptyKey("capitals"));
            }
            if p.lower.len() != p.upper.len() {
                return Err(TablesError::CapitalWidth {
                    lower: p.lower.clone(),
                    upper: p.upper.clone(),
                });
            }
            if p.lower.len() != width {
                return Err(TablesError::MixedWidth(p.lower.clone(), width));
            }
        }

        Ok(Self { pairs, width })
    }

    /// Capital pair for the first letter of `word`, if it has one.
    ///
    /// Only the leading `width` bytes of `word` take part in the comparison.
    pub fn lookup(&self, word: &str) -> Option<&CapitalPair> {
        if self.width == 0 {
            return None;
        }
        let key = word.as_bytes().get(..self.width)?;
        self.pairs
            .binary_search_by(|p| p.lower.as_bytes().cmp(key))
            .ok()
            .map(|i| &self.pairs[i])
    }

    /// Byte width shared by every letter in the table.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
