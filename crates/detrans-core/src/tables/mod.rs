//! Fixed datasets consumed at engine build time.
//!
//! The exception-word list, the symbol replacement list, and the
//! capitalization pairs ship as one embedded TOML document. Hosts may supply
//! their own document with the same layout.

mod config;

use std::sync::OnceLock;

pub use config::{parse_tables_toml, TablesError};

pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

/// Parsed translit datasets, each sorted by key.
#[derive(Debug, Clone)]
pub struct DetransTables {
    /// Whole words with irregular transliteration. Loaded first.
    pub special_words: Vec<(String, String)>,
    /// Letters, digraphs, and punctuation. Loaded after `special_words`.
    pub replacements: Vec<(String, String)>,
    /// `(lowercase, capital)` letter pairs, sorted by the lowercase form.
    pub capitals: Vec<(String, String)>,
}

impl DetransTables {
    /// Dictionary entries in insertion order.
    pub fn dictionary_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.special_words
            .iter()
            .chain(self.replacements.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Returns the embedded default datasets TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLES_TOML
}

/// Get or lazily parse the embedded default datasets.
pub fn default_tables() -> &'static DetransTables {
    static INSTANCE: OnceLock<DetransTables> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_tables_toml(DEFAULT_TABLES_TOML).expect("default tables TOML must be valid")
    })
}
