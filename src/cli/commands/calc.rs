//! Calc command handler

use super::{collect_entries, configured_program, fail};
use cgpa_calc::config::Config;
use cgpa_calc::core::cgpa::{format_credits, CgpaSummary, CourseAccumulator, TargetStatus};
use cgpa_calc::core::models::CourseEntry;
use cgpa_calc::verbose;
use std::path::Path;

/// Arguments of the calc command
pub struct CalcRequest<'a> {
    /// Entries typed on the command line
    pub entries: &'a [String],
    /// Optional transcript file
    pub file: Option<&'a Path>,
    /// Explicit credit target
    pub target_credits: Option<f64>,
    /// Extra thesis credits
    pub thesis_credits: Option<f64>,
}

/// Run the calc command
pub fn run(request: &CalcRequest, config: &Config) {
    if let Err(e) = calculate(request, config) {
        fail(&e);
    }
}

fn calculate(request: &CalcRequest, config: &Config) -> Result<(), String> {
    let mut entries = collect_entries(request.entries, request.file)?;
    if let Some(credits) = request.thesis_credits {
        entries.push(CourseEntry::thesis(credits).map_err(|e| e.to_string())?);
    }
    if entries.is_empty() {
        cgpa_calc::warn!("No course entries given. Use GRADE:CREDITS or --file");
    }

    let program = configured_program(config)?;
    let target = request
        .target_credits
        .or_else(|| program.map(|p| p.required_credits));
    let program_name = program
        .filter(|_| request.target_credits.is_none())
        .map(|p| p.name);

    for entry in &entries {
        verbose!(
            "{:<12} {:>6} credits  {}",
            entry.name.as_deref().unwrap_or("-"),
            format_credits(entry.credits),
            entry.grade_label()
        );
    }

    for line in summary_lines(&entries, target, program_name, config.grading.decimals)? {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed for a set of entries, or the target error when the CGPA is withheld
fn summary_lines(
    entries: &[CourseEntry],
    target: Option<f64>,
    program_name: Option<&str>,
    decimals: u32,
) -> Result<Vec<String>, String> {
    let acc = CourseAccumulator::from_entries(entries);
    let summary = CgpaSummary::from_accumulator(&acc, decimals);
    let mut lines = Vec::new();

    if let Some(target) = target {
        let status = TargetStatus::evaluate(summary.total_credits(), target);
        if status.is_error() {
            return Err(status.to_string());
        }
        if let Some(name) = program_name {
            lines.push(format!("Program: {name}"));
        }
        lines.push(summary.to_string());
        lines.push(status.to_string());
    } else {
        lines.push(summary.to_string());
    }

    lines.push(format!(
        "Graded credits: {}  Thesis credits: {}  Courses: {}",
        format_credits(summary.graded_credits),
        format_credits(summary.thesis_credits),
        summary.courses
    ));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(raw: &[&str]) -> Vec<CourseEntry> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_empty_input_prints_no_data() {
        let lines = summary_lines(&[], None, None, 2).unwrap();
        assert_eq!(
            lines,
            vec![
                "Current CGPA: --",
                "Graded credits: 0  Thesis credits: 0  Courses: 0"
            ]
        );
    }

    #[test]
    fn test_program_target_lines() {
        let lines = summary_lines(&entries(&["A:3", "B:3"]), Some(12.0), Some("BSc"), 2).unwrap();
        assert_eq!(
            lines,
            vec![
                "Program: BSc",
                "Current CGPA: 3.50",
                "Still need to add 6 more credits",
                "Graded credits: 6  Thesis credits: 0  Courses: 2"
            ]
        );
    }

    #[test]
    fn test_fractional_credits_are_trimmed() {
        let lines = summary_lines(&entries(&["A:3.1", "B:3.3"]), None, None, 2).unwrap();
        assert_eq!(lines[1], "Graded credits: 6.4  Thesis credits: 0  Courses: 2");
    }

    #[test]
    fn test_exceeded_target_withholds_cgpa() {
        let err = summary_lines(&entries(&["A:9", "B:6"]), Some(12.0), None, 2).unwrap_err();
        assert_eq!(err, "Total credits (15) exceeds target (12)");
    }
}
