pub mod config_ops;
pub mod convert_ops;

use std::fs;
use std::process;

use detrans_core::settings::{self, parse_settings_toml, Settings};
use detrans_core::tables::{default_tables, parse_tables_toml};
use detrans_core::Engine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Build an engine from optional tables/settings TOML files, falling back to
/// the embedded defaults.
pub fn load_engine(tables_file: Option<&str>, settings_file: Option<&str>) -> Engine {
    let settings: Settings = match settings_file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_settings_toml(&content), "Error in {path}: {}")
        }
        None => settings::settings().clone(),
    };
    let engine = match tables_file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            let tables = die!(parse_tables_toml(&content), "Error in {path}: {}");
            Engine::new(&tables, &settings)
        }
        None => Engine::new(default_tables(), &settings),
    };
    die!(engine, "Error building engine: {}")
}
