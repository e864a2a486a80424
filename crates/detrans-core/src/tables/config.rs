use std::collections::BTreeMap;

use serde::Deserialize;

use super::DetransTables;

#[derive(Deserialize)]
struct TablesConfig {
    #[serde(default)]
    special_words: BTreeMap<String, String>,
    replacements: BTreeMap<String, String>,
    capitals: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("empty key in [{0}]")]
    EmptyKey(&'static str),
    #[error("non-ASCII key in [{table}]: {key}")]
    NonAsciiKey { table: &'static str, key: String },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("capital pair {lower:?}/{upper:?} differs in byte length")]
    CapitalWidth { lower: String, upper: String },
    #[error("capital letter {0:?} is not {1} bytes wide like the others")]
    MixedWidth(String, usize),
}

/// Parse TOML text into the three translit datasets.
pub fn parse_tables_toml(toml_str: &str) -> Result<DetransTables, TablesError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TablesError::Parse(e.to_string()))?;

    if config.replacements.is_empty() {
        return Err(TablesError::Empty("replacements"));
    }
    if config.capitals.is_empty() {
        return Err(TablesError::Empty("capitals"));
    }

    validate_translit("special_words", &config.special_words)?;
    validate_translit("replacements", &config.replacements)?;
    validate_capitals(&config.capitals)?;

    Ok(DetransTables {
        special_words: config.special_words.into_iter().collect(),
        replacements: config.replacements.into_iter().collect(),
        capitals: config.capitals.into_iter().collect(),
    })
}

fn validate_translit(
    table: &'static str,
    map: &BTreeMap<String, String>,
) -> Result<(), TablesError> {
    for (key, value) in map {
        if key.is_empty() {
            return Err(TablesError::EmptyKey(table));
        }
        if !key.is_ascii() {
            return Err(TablesError::NonAsciiKey {
                table,
                key: key.clone(),
            });
        }
        if value.is_empty() {
            return Err(TablesError::EmptyValue(key.clone()));
        }
    }
    Ok(())
}

fn validate_capitals(map: &BTreeMap<String, String>) -> Result<(), TablesError> {
    let mut width = None;
    for (lower, upper) in map {
        if lower.is_empty() {
            return Err(TablesError::EmptyKey("capitals"));
        }
        if upper.is_empty() {
            return Err(TablesError::EmptyValue(lower.clone()));
        }
        if lower.len() != upper.len() {
            return Err(TablesError::CapitalWidth {
                lower: lower.clone(),
                upper: upper.clone(),
            });
        }
        match width {
            None => width = Some(lower.len()),
            Some(w) if w != lower.len() => return Err(TablesError::MixedWidth(lower.clone(), w)),
            Some(_) => {}
        }
    }
    Ok(())
}
