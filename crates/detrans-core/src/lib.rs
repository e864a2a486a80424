//! Translit-to-Cyrillic de-transliteration engine.
//!
//! Latin "translit" text is rewritten into Cyrillic by a longest-match scan
//! over a prefix dictionary, with markup, URLs, and HTML entities passed
//! through untouched and leading capitals restored on matched words.

pub mod capital;
pub mod corpus;
pub mod dict;
pub mod engine;
pub mod settings;
pub mod tables;
mod transducer;

pub use dict::MatchResult;
pub use engine::{Engine, EngineError, EngineStats};
