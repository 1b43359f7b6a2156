//! Report command handler
//!
//! Renders a transcript CSV as a Markdown or HTML report.

use super::{configured_program, fail};
use cgpa_calc::config::Config;
use cgpa_calc::core::models::{Program, Transcript};
use cgpa_calc::core::report::{ReportContext, ReportFormat};
use cgpa_calc::core::transcript::parse_transcript_csv;
use cgpa_calc::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Path to the transcript CSV file
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration with the default reports directory and program
pub fn run(input_file: &Path, output_file: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(input_file, output_file, format_str, config) {
        error!(
            "Report generation failed for {}: {err}",
            input_file.display()
        );
        fail(&err);
    }
}

/// Program named in the transcript, falling back to the configured one
fn report_program(
    transcript: &Transcript,
    config: &Config,
) -> Result<Option<&'static Program>, String> {
    match transcript.program.as_deref() {
        Some(key) => Program::find(key)
            .map(Some)
            .ok_or_else(|| format!("Unknown program '{key}' in transcript")),
        None => configured_program(config),
    }
}

fn output_path(
    input_file: &Path,
    output_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let filename = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transcript");
    Ok(reports_dir.join(format!("{filename}_report.{}", format.extension())))
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("{e}. Use: markdown or html"))?;

    let transcript = parse_transcript_csv(input_file)
        .map_err(|e| format!("Failed to load {}: {e}", input_file.display()))?;
    info!("Transcript loaded: {}", input_file.display());

    let program = report_program(&transcript, config)?;
    let ctx = ReportContext::new(&transcript, program, config.grading.decimals);

    let path = output_path(input_file, output_file, format, config)?;
    format
        .reporter()
        .generate(&ctx, &path)
        .map_err(|e| format!("Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", path.display());
    info!("Report exported to: {}", path.display());

    let totals = ctx.totals();
    println!("\n=== Summary ===");
    if let Some(student) = &transcript.student {
        println!("Student: {student}");
    }
    println!("Current CGPA: {}", ctx.cgpa_text());
    println!("Semesters: {}", transcript.semesters.len());
    println!("Courses: {}", totals.courses);
    if let Some(status) = ctx.target_status() {
        println!("{status}");
    }

    Ok(())
}
