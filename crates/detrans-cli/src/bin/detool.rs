use clap::{Parser, Subcommand};

use detrans_cli::commands::{config_ops, convert_ops, load_engine};

#[derive(Parser)]
#[command(name = "detool", about = "Translit to Cyrillic de-transliteration tool")]
struct Cli {
    /// Custom tables TOML (default: embedded tables)
    #[arg(long, global = true)]
    tables: Option<String>,
    /// Custom settings TOML (default: embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text (reads stdin lines when no text is given)
    Convert {
        /// Translit text
        text: Vec<String>,
    },
    /// Show the longest dictionary match at the start of a key
    Lookup {
        /// Translit key
        key: String,
    },
    /// Check conversions against a `native<TAB>translit` corpus
    Check {
        /// Corpus file
        corpus_file: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show dictionary statistics and active settings
    Info,
    /// Export default tables as TOML
    TablesExport,
    /// Validate a custom tables TOML file
    TablesValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("detrans_core=debug")),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging();
    }

    let engine = || load_engine(cli.tables.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Convert { ref text } => convert_ops::convert_cmd(&engine(), text),
        Command::Lookup { ref key } => convert_ops::lookup_cmd(&engine(), key),
        Command::Check {
            ref corpus_file,
            json,
        } => convert_ops::check_cmd(&engine(), corpus_file, json),
        Command::Info => convert_ops::info_cmd(&engine()),
        Command::TablesExport => config_ops::tables_export(),
        Command::TablesValidate { ref file } => config_ops::tables_validate(file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { ref file } => config_ops::settings_validate(file),
    }
}
