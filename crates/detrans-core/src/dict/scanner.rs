use super::PrefixDictionary;

/// Longest dictionary match at the start of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// Source characters consumed.
    pub char_len: usize,
    /// Source bytes consumed.
    pub byte_len: usize,
    pub word: &'a str,
}

impl PrefixDictionary {
    /// Walk the trie along `text` and return the deepest terminal reached.
    ///
    /// The walk stops at the first character without a child or at the end of
    /// `text`. A shorter key that prefixes a longer matching key never wins.
    pub fn longest_match(&self, text: &str) -> Option<MatchResult<'_>> {
        let mut node = self.root();
        let mut best = None;

        for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
            let Some(child) = node.child_at(c) else {
                break;
            };
            node = child;
            if let Some(id) = node.word() {
                best = Some(MatchResult {
                    char_len: char_idx + 1,
                    byte_len: byte_idx + c.len_utf8(),
                    word: self.word(id),
                });
            }
        }

        best
    }
}
