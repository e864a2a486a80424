//! De-transliteration engine: immutable dictionary + capital table.
//!
//! An `Engine` is built once from the datasets and then shared freely;
//! `convert` takes `&self` and touches no mutable state, so any number of
//! threads may convert through the same engine.

use std::collections::TryReserveError;

use tracing::{debug, debug_span};

use crate::capital::CapitalTable;
use crate::dict::{MatchResult, PrefixDictionary};
use crate::settings::{settings, Settings};
use crate::tables::{default_tables, DetransTables, TablesError};
use crate::transducer::Transducer;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid tables: {0}")]
    Tables(#[from] TablesError),
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    pub nodes: usize,
    pub terminals: usize,
    pub capitals: usize,
    /// Upper bound on output bytes per input byte.
    pub expansion_ratio: usize,
}

pub struct Engine {
    dict: PrefixDictionary,
    capitals: CapitalTable,
    settings: Settings,
    expansion_ratio: usize,
}

impl Engine {
    /// Build an engine from the embedded datasets and the global settings.
    pub fn initialize() -> Result<Self, EngineError> {
        Self::new(default_tables(), settings())
    }

    pub fn new(tables: &DetransTables, settings: &Settings) -> Result<Self, EngineError> {
        let _span = debug_span!("engine_build").entered();

        let dict = PrefixDictionary::from_entries(tables.dictionary_entries());
        let capitals = CapitalTable::new(tables.capitals.iter().cloned())?;
        let expansion_ratio = expansion_ratio(&dict);

        debug!(
            nodes = dict.node_count(),
            terminals = dict.len(),
            capitals = capitals.len(),
            expansion_ratio,
        );

        Ok(Self {
            dict,
            capitals,
            settings: settings.clone(),
            expansion_ratio,
        })
    }

    /// Convert translit `text` into Cyrillic.
    ///
    /// The output buffer is reserved once for the worst case, so the only
    /// possible failure is that reservation.
    pub fn convert(&self, text: &str) -> Result<String, EngineError> {
        let mut out = String::new();
        out.try_reserve_exact(text.len().saturating_mul(self.expansion_ratio))?;
        Transducer {
            dict: &self.dict,
            capitals: &self.capitals,
            settings: &self.settings,
        }
        .run(text, &mut out);
        Ok(out)
    }

    /// Longest dictionary match at the start of `text`.
    pub fn lookup<'a>(&'a self, text: &str) -> Option<MatchResult<'a>> {
        self.dict.longest_match(text)
    }

    pub fn dictionary(&self) -> &PrefixDictionary {
        &self.dict
    }

    pub fn capitals(&self) -> &CapitalTable {
        &self.capitals
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            nodes: self.dict.node_count(),
            terminals: self.dict.len(),
            capitals: self.capitals.len(),
            expansion_ratio: self.expansion_ratio,
        }
    }

    /// Release the engine. Consuming `self` rules out any later use.
    pub fn shutdown(self) {
        debug!(terminals = self.dict.len(), "engine shutdown");
    }
}

/// Smallest `r` such that every entry's replacement fits in `r` bytes per
/// key byte. Source text never folds to fewer bytes than the key it matches,
/// and capital forms share the width of their lowercase letters.
fn expansion_ratio(dict: &PrefixDictionary) -> usize {
    dict.entries()
        .iter()
        .map(|(key, word)| word.len().div_ceil(key.len().max(1)))
        .max()
        .unwrap_or(1)
        .max(1)
}
