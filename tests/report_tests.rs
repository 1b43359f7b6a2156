//! Integration tests for Markdown and HTML transcript reports

use cgpa_calc::core::models::{CourseEntry, Program, Transcript};
use cgpa_calc::core::report::{ReportContext, ReportFormat, ReportGenerator};
use cgpa_calc::core::transcript::parse_transcript_csv;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn load_sample() -> Transcript {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/transcripts/msc_thesis.csv");
    parse_transcript_csv(path).expect("sample should parse")
}

#[test]
fn test_markdown_report_content() {
    let transcript = load_sample();
    let ctx = ReportContext::new(&transcript, Program::find("msc-thesis"), 2);
    let content = ReportFormat::Markdown
        .reporter()
        .render(&ctx)
        .expect("markdown should render");

    assert!(content.starts_with("# Transcript Report: Jane Doe"));
    assert!(content.contains("**Program:** Master of Science (Thesis)"));
    assert!(content.contains("**Current CGPA:** 3.48"));
    assert!(content.contains("All target credits entered"));
    assert!(content.contains("| Fall 2024 | 3 | 9.0 | 3.57 | 3.47 |"));
    assert!(content.contains("| Spring 2025 | CS 699 Thesis | THESIS | 9.0 | - |"));
    assert!(content.contains("| 97-100 | A+ | 4.0 |"));
    assert!(content.contains("| <50 | F | 0.0 |"));
}

#[test]
fn test_html_report_content() {
    let transcript = load_sample();
    let ctx = ReportContext::new(&transcript, Program::find("msc-thesis"), 3);
    let content = ReportFormat::Html
        .reporter()
        .render(&ctx)
        .expect("html should render");

    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("Current CGPA: 3.478"));
    assert!(content.contains("<td>CS 500 Algorithms</td>"));
    assert!(content.contains("</html>"));
}

#[test]
fn test_html_escapes_transcript_text() {
    let mut transcript = Transcript::new();
    transcript.student = Some("<script>alert(1)</script>".to_string());
    transcript.semester_mut_or_insert("Fall").add(
        "A:3"
            .parse::<CourseEntry>()
            .expect("entry should parse")
            .with_name("R&D"),
    );

    let ctx = ReportContext::new(&transcript, None, 2);
    let content = ReportFormat::Html
        .reporter()
        .render(&ctx)
        .expect("html should render");

    assert!(!content.contains("<script>"));
    assert!(content.contains("&lt;script&gt;"));
    assert!(content.contains("R&amp;D"));
}

#[test]
fn test_report_without_program_or_courses() {
    let transcript = Transcript::new();
    let ctx = ReportContext::new(&transcript, None, 2);
    let content = ReportFormat::Markdown
        .reporter()
        .render(&ctx)
        .expect("markdown should render");

    assert!(content.starts_with("# Transcript Report\n"));
    assert!(content.contains("**Current CGPA:** --"));
    assert!(!content.contains("**Program:**"));
    assert!(!content.contains("**Progress:**"));
}

#[test]
fn test_generate_writes_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let transcript = load_sample();
    let ctx = ReportContext::new(&transcript, Program::find("msc-thesis"), 2);

    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = temp_dir
            .path()
            .join(format!("report.{}", format.extension()));
        format
            .reporter()
            .generate(&ctx, &path)
            .expect("report should be written");

        let written = fs::read_to_string(&path).expect("report file should exist");
        assert!(written.contains("3.48"));
    }
}
