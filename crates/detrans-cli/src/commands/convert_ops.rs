use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use detrans_core::corpus::{self, CheckReport};
use detrans_core::Engine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Convert each argument, or each stdin line when no arguments are given.
pub fn convert_cmd(engine: &Engine, texts: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if texts.is_empty() {
        let stdin = io::stdin();
        die!(
            convert_lines(engine, stdin.lock(), &mut out),
            "Error converting input: {}"
        );
    } else {
        for text in texts {
            let converted = die!(engine.convert(text), "Error: {}");
            die!(writeln!(out, "{converted}"), "Error writing output: {}");
        }
    }
}

pub fn convert_lines(
    engine: &Engine,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let converted = engine
            .convert(&line)
            .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
        writeln!(output, "{converted}")?;
    }
    Ok(())
}

pub fn lookup_cmd(engine: &Engine, key: &str) {
    println!("{}", describe_lookup(engine, key));
}

pub fn describe_lookup(engine: &Engine, key: &str) -> String {
    match engine.lookup(key) {
        Some(m) => format!(
            "{} → {} ({} chars, rest {:?})",
            &key[..m.byte_len],
            m.word,
            m.char_len,
            &key[m.byte_len..]
        ),
        None => format!("{key}: no match"),
    }
}

pub fn check_cmd(engine: &Engine, corpus_file: &str, json: bool) {
    let report = die!(
        corpus::check_file(engine, Path::new(corpus_file)),
        "Error checking {corpus_file}: {}"
    );
    print!("{}", die!(format_report(&report, json), "Error: {}"));
    if !report.mismatches.is_empty() {
        process::exit(1);
    }
}

pub fn format_report(report: &CheckReport, json: bool) -> Result<String, serde_json::Error> {
    if json {
        let mut s = serde_json::to_string_pretty(report)?;
        s.push('\n');
        return Ok(s);
    }

    let mut s = String::new();
    for m in &report.mismatches {
        s.push_str(&format!(
            "{}: expected {}, got {}\n",
            m.translit, m.expected, m.actual
        ));
    }
    if !report.mismatches.is_empty() {
        s.push_str("\n# Suggested [special_words] entries:\n");
        for m in &report.mismatches {
            s.push_str(&m.suggestion());
            s.push('\n');
        }
    }
    s.push_str(&format!(
        "{}/{} entries converted correctly\n",
        report.passed(),
        report.total
    ));
    Ok(s)
}

pub fn info_cmd(engine: &Engine) {
    let stats = engine.stats();
    let settings = engine.settings();
    println!("Dictionary:");
    println!("  nodes:           {}", stats.nodes);
    println!("  terminals:       {}", stats.terminals);
    println!("  capitals:        {}", stats.capitals);
    println!("  expansion ratio: {}", stats.expansion_ratio);
    println!("Passthrough:");
    println!("  markup:          {}", settings.passthrough.markup);
    println!("  url:             {}", settings.passthrough.url);
    println!("  url prefixes:    {:?}", settings.passthrough.url_prefixes);
    println!("  entity:          {}", settings.passthrough.entity);
    println!("  &apos; rewrite:  {}", settings.normalize.apostrophe_entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use detrans_core::corpus::Mismatch;

    fn engine() -> Engine {
        Engine::initialize().unwrap()
    }

    #[test]
    fn convert_lines_per_line() {
        let engine = engine();
        let mut out = Vec::new();
        convert_lines(&engine, "privet\nPoka!\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "привет\nПока!\n");
    }

    #[test]
    fn describe_lookup_match() {
        let engine = engine();
        assert_eq!(
            describe_lookup(&engine, "shchi"),
            "shch → щ (4 chars, rest \"i\")"
        );
        assert_eq!(describe_lookup(&engine, "123"), "123: no match");
    }

    #[test]
    fn format_report_text() {
        let report = CheckReport {
            total: 2,
            mismatches: vec![Mismatch {
                translit: "yogurt".to_string(),
                expected: "йогурт".to_string(),
                actual: "ёгурт".to_string(),
            }],
        };
        let text = format_report(&report, false).unwrap();
        assert!(text.contains("yogurt: expected йогурт, got ёгурт\n"));
        assert!(text.contains("\"yogurt\" = \"йогурт\"\n"));
        assert!(text.ends_with("1/2 entries converted correctly\n"));
    }

    #[test]
    fn format_report_json() {
        let report = CheckReport {
            total: 1,
            mismatches: Vec::new(),
        };
        let text = format_report(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total"], 1);
        assert!(value["mismatches"].as_array().unwrap().is_empty());
    }
}
