//! CLI command handlers for `cgpacalc`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod eval;
pub mod programs;
pub mod project;
pub mod report;
pub mod scale;

use cgpa_calc::config::Config;
use cgpa_calc::core::models::{CourseEntry, Program};
use cgpa_calc::core::transcript::parse_transcript_csv;
use std::path::Path;

/// Print an error line and exit with a non-zero status
pub fn fail(message: &str) -> ! {
    eprintln!("✗ {message}");
    std::process::exit(1);
}

/// Program preset selected by `grading.program`, if any
///
/// # Errors
/// Returns a message when the configured key matches no preset.
pub fn configured_program(config: &Config) -> Result<Option<&'static Program>, String> {
    let key = config.grading.program.trim();
    if key.is_empty() {
        return Ok(None);
    }
    Program::find(key)
        .map(Some)
        .ok_or_else(|| format!("Unknown program '{key}'. Run `cgpacalc programs` to list presets"))
}

/// Collect entries typed on the command line plus those read from a transcript file
///
/// # Errors
/// Returns a message naming the first entry or file that fails to parse.
pub fn collect_entries(inline: &[String], file: Option<&Path>) -> Result<Vec<CourseEntry>, String> {
    let mut entries = Vec::new();

    if let Some(path) = file {
        let transcript = parse_transcript_csv(path)
            .map_err(|e| format!("Failed to load {}: {e}", path.display()))?;
        cgpa_calc::info!(
            "Loaded {} entries from {}",
            transcript.entry_count(),
            path.display()
        );
        entries.extend(transcript.entries().cloned());
    }

    for raw in inline {
        let entry = raw
            .parse::<CourseEntry>()
            .map_err(|e| format!("Invalid entry '{raw}': {e}"))?;
        cgpa_calc::debug!("Parsed entry {raw} -> {}", entry.grade_label());
        entries.push(entry);
    }

    Ok(entries)
}
