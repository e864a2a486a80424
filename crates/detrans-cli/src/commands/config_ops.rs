use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn tables_export() {
    print!("{}", detrans_core::tables::default_toml());
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(
        detrans_core::tables::parse_tables_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: {} special words, {} replacements, {} capitals",
        tables.special_words.len(),
        tables.replacements.len(),
        tables.capitals.len()
    );
}

pub fn settings_export() {
    print!("{}", detrans_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        detrans_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: markup={}, url={}, entity={}, url_prefixes={:?}, apostrophe_entity={}",
        s.passthrough.markup,
        s.passthrough.url,
        s.passthrough.entity,
        s.passthrough.url_prefixes,
        s.normalize.apostrophe_entity
    );
}
