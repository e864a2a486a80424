mod passthrough;

use crate::settings::Settings;
use crate::tables::{default_tables, parse_tables_toml};
use crate::Engine;

pub(super) fn default_engine() -> Engine {
    Engine::new(default_tables(), &Settings::default()).unwrap()
}

pub(super) fn engine_with(settings: &Settings) -> Engine {
    Engine::new(default_tables(), settings).unwrap()
}

/// Minimal alphabet for exercising the matching rules in isolation.
pub(super) fn small_engine() -> Engine {
    let tables = parse_tables_toml(
        r#"
[special_words]
shod = "сход"

[replacements]
s = "с"
sh = "ш"
shch = "щ"
h = "х"
i = "и"
o = "о"
d = "д"
q = "!"
"'" = "ь"

[capitals]
"д" = "Д"
"и" = "И"
"о" = "О"
"с" = "С"
"х" = "Х"
"ш" = "Ш"
"щ" = "Щ"
"ь" = "Ь"
"#,
    )
    .unwrap();
    Engine::new(&tables, &Settings::default()).unwrap()
}

pub(super) fn convert(engine: &Engine, text: &str) -> String {
    engine.convert(text).unwrap()
}
