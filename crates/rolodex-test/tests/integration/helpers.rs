#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Writing address books to temporary files
//! - Building settings without touching the environment
//! - Running the CLI in-process and capturing its output

use std::io::Write;

use chrono::NaiveDate;
use clap::Parser;
use rolodex_app::cli::Cli;
use rolodex_app::error::AppResult;
use rolodex_core::config::{LoggingConfig, OutputConfig, OutputFormat, Settings};
use tempfile::NamedTempFile;

/// The date every in-process run treats as today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

/// Writes `contents` to a fresh `.vcf` file that lives as long as the handle.
pub fn write_book(contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".vcf")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write temp file");
    file
}

pub fn settings(format: OutputFormat, pretty: bool) -> Settings {
    Settings {
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        output: OutputConfig { format, pretty },
    }
}

/// Runs `rolodex <args>` against `settings` and returns stdout.
pub fn run(args: &[&str], settings: &Settings) -> AppResult<String> {
    let cli = Cli::try_parse_from(std::iter::once("rolodex").chain(args.iter().copied()))
        .expect("Arguments should parse");
    let mut out = Vec::new();
    rolodex_app::run_on(&cli, settings, today(), &mut out)?;
    Ok(String::from_utf8(out).expect("Output should be UTF-8"))
}

/// Runs with JSON output and parses the result.
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let out = run(args, &settings(OutputFormat::Json, false)).expect("Command should succeed");
    serde_json::from_str(&out).expect("Output should be JSON")
}

pub fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("Temp path should be UTF-8")
}
