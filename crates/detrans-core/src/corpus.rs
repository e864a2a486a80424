//! Dataset verification against a reference corpus.
//!
//! A corpus is a text file of `native<TAB>translit` pairs, one per line.
//! Every translit form is converted and compared with its native spelling;
//! mismatches are reported together with a `[special_words]` entry that would
//! fix them.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::engine::{Engine, EngineError};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected `native<TAB>translit`")]
    Malformed { line: usize },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub native: String,
    pub translit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub translit: String,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    /// TOML line for the `[special_words]` table.
    pub fn suggestion(&self) -> String {
        let key = toml::Value::String(self.translit.to_lowercase());
        let value = toml::Value::String(self.expected.clone());
        format!("{key} = {value}")
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub total: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    pub fn passed(&self) -> usize {
        self.total - self.mismatches.len()
    }
}

/// Parse corpus text. Fields are separated by any run of whitespace; blank
/// lines and lines starting with `#` are skipped.
pub fn parse_corpus(text: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(native), Some(translit), None) => entries.push(CorpusEntry {
                native: native.to_string(),
                translit: translit.to_string(),
            }),
            _ => return Err(CorpusError::Malformed { line: i + 1 }),
        }
    }
    Ok(entries)
}

pub fn check(engine: &Engine, entries: &[CorpusEntry]) -> Result<CheckReport, CorpusError> {
    let mut report = CheckReport {
        total: entries.len(),
        mismatches: Vec::new(),
    };
    for entry in entries {
        let actual = engine.convert(&entry.translit)?;
        if actual != entry.native {
            report.mismatches.push(Mismatch {
                translit: entry.translit.clone(),
                expected: entry.native.clone(),
                actual,
            });
        }
    }
    debug!(
        total = report.total,
        mismatches = report.mismatches.len(),
        "corpus checked"
    );
    Ok(report)
}

pub fn check_file(engine: &Engine, path: &Path) -> Result<CheckReport, CorpusError> {
    let text = fs::read_to_string(path)?;
    let entries = parse_corpus(&text)?;
    check(engine, &entries)
}
