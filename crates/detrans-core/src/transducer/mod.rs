//! Message-level de-transliteration.
//!
//! Walks the input left to right. At each position the passthrough rules are
//! tried first (markup, URL, entity), then the longest dictionary match; a
//! position nothing claims is copied as a single character.

mod passthrough;
#[cfg(test)]
mod tests;

use tracing::debug_span;

use crate::capital::CapitalTable;
use crate::dict::PrefixDictionary;
use crate::settings::Settings;

use passthrough::{copy_through, normalize_apostrophes};

pub(crate) struct Transducer<'a> {
    pub(crate) dict: &'a PrefixDictionary,
    pub(crate) capitals: &'a CapitalTable,
    pub(crate) settings: &'a Settings,
}

impl Transducer<'_> {
    /// Append the de-transliterated form of `text` to `out`.
    pub(crate) fn run(&self, text: &str, out: &mut String) {
        let _span = debug_span!("transduce", bytes = text.len()).entered();
        let normalized = if self.settings.normalize.apostrophe_entity {
            normalize_apostrophes(text)
        } else {
            text.into()
        };

        let mut rest: &str = &normalized;
        while let Some(c) = rest.chars().next() {
            let consumed = self.step(rest, c, out);
            rest = &rest[consumed..];
        }
    }

    /// Handle the position at the start of `rest`, whose first char is `c`.
    /// Returns the number of bytes consumed (always at least one char).
    fn step(&self, rest: &str, c: char, out: &mut String) -> usize {
        let rules = &self.settings.passthrough;

        if rules.markup && c == '<' {
            return copy_through(rest, '>', out);
        }
        if rules.url && rules.url_prefixes.iter().any(|p| rest.starts_with(p.as_str())) {
            return copy_through(rest, ' ', out);
        }
        if rules.entity && c == '&' {
            return copy_through(rest, ';', out);
        }

        let capital = c.is_uppercase();
        match self.dict.longest_match(rest) {
            Some(m) => {
                self.emit(m.word, capital, out);
                m.byte_len
            }
            None => {
                out.push(c);
                c.len_utf8()
            }
        }
    }

    /// Only the first letter is recased; the rest keeps the stored casing.
    fn emit(&self, word: &str, capital: bool, out: &mut String) {
        if capital {
            if let Some(pair) = self.capitals.lookup(word) {
                out.push_str(&pair.upper);
                out.push_str(&word[pair.lower.len()..]);
                return;
            }
        }
        out.push_str(word);
    }
}
