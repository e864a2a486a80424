//! Prefix dictionary mapping translit keys to Cyrillic replacements.
//!
//! `PrefixDictionary` is a character trie whose terminal nodes point into a
//! `WordStore`. Keys are case-folded on insertion and on every child lookup,
//! so a single lowercase entry serves all casings of the source text.

mod scanner;
#[cfg(test)]
mod tests;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::debug;

pub use scanner::MatchResult;

/// Fold a character to its lowercase form for key comparison.
///
/// Characters whose lowercase form is more than one character keep their
/// original value.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Index of a replacement string inside a `WordStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordId(u32);

/// Owns every replacement string referenced by the dictionary.
#[derive(Debug, Default)]
pub struct WordStore {
    words: Vec<Box<str>>,
}

impl WordStore {
    fn push(&mut self, word: &str) -> WordId {
        let id = WordId(self.words.len() as u32);
        self.words.push(word.into());
        id
    }

    pub fn get(&self, id: WordId) -> &str {
        &self.words[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct DictNode {
    children: BTreeMap<char, DictNode>,
    word: Option<WordId>,
}

impl DictNode {
    /// Child reached by `c`, compared case-insensitively.
    pub fn child_at(&self, c: char) -> Option<&DictNode> {
        self.children.get(&fold_char(c))
    }

    pub fn word(&self) -> Option<WordId> {
        self.word
    }

    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }
}

#[derive(Debug, Default)]
pub struct PrefixDictionary {
    root: DictNode,
    words: WordStore,
    node_count: usize,
}

impl PrefixDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, replacement)` pairs, inserted in iteration order.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut dict = Self::new();
        for (key, word) in entries {
            dict.insert(key, word);
        }
        dict
    }

    /// Insert `key` → `word`. Returns `true` if a new terminal was created.
    ///
    /// Empty keys are ignored. A key that is already terminal keeps its
    /// first replacement; later insertions of the same folded key are no-ops.
    pub fn insert(&mut self, key: &str, word: &str) -> bool {
        if key.is_empty() {
            return false;
        }

        let Self {
            root,
            words,
            node_count,
        } = self;

        let mut node = root;
        for c in key.chars() {
            node = match node.children.entry(fold_char(c)) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    *node_count += 1;
                    e.insert(DictNode::default())
                }
            };
        }

        if let Some(existing) = node.word {
            debug!(key, kept = words.get(existing), ignored = word, "duplicate key");
            return false;
        }
        node.word = Some(words.push(word));
        true
    }

    pub fn root(&self) -> &DictNode {
        &self.root
    }

    /// Child of `node` reached by `c`, compared case-insensitively.
    pub fn child_at<'a>(&self, node: &'a DictNode, c: char) -> Option<&'a DictNode> {
        node.child_at(c)
    }

    /// Exact lookup of a whole key.
    pub fn get(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for c in key.chars() {
            node = node.child_at(c)?;
        }
        node.word.map(|id| self.words.get(id))
    }

    pub fn word(&self, id: WordId) -> &str {
        self.words.get(id)
    }

    pub fn words(&self) -> &WordStore {
        &self.words
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of terminal nodes.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All `(key, replacement)` pairs in key order.
    pub fn entries(&self) -> Vec<(String, &str)> {
        let mut out = Vec::with_capacity(self.words.len());
        let mut stack: Vec<(String, &DictNode)> = vec![(String::new(), &self.root)];
        while let Some((prefix, node)) = stack.pop() {
            if let Some(id) = node.word {
                out.push((prefix.clone(), self.words.get(id)));
            }
            for (&c, child) in node.children.iter().rev() {
                let mut key = prefix.clone();
                key.push(c);
                stack.push((key, child));
            }
        }
        out
    }
}
