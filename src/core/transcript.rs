//! CSV parser for transcript files
//!
//! A transcript file starts with `Key,Value` metadata lines, followed by a
//! `Courses` marker line, a header row and one row per course:
//!
//! ```text
//! Student,Jane Doe
//! Program,msc-thesis
//! Base CGPA,3.40
//! Base Credits,12
//! Courses
//! Semester,Course,Grade,Credits,Thesis
//! Fall 2024,CS 500,A-,3,
//! Fall 2024,CS 510,88,3,
//! Spring 2025,CS 699,,6,yes
//! ```

use crate::core::error::GradeError;
use crate::core::models::{BaseRecord, CourseEntry, Transcript};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default semester label for rows with an empty semester column
pub const DEFAULT_SEMESTER: &str = "Courses";

/// Errors raised while reading a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// File could not be read
    #[error("failed to read transcript: {0}")]
    Io(#[from] std::io::Error),

    /// Required structure is missing
    #[error("{0}")]
    Format(String),

    /// Metadata value that is not a number
    #[error("invalid value for '{key}': '{value}'")]
    Metadata {
        /// Metadata key
        key: String,
        /// Offending value
        value: String,
    },

    /// Base record out of range
    #[error("invalid base record: {0}")]
    Base(GradeError),

    /// A course row failed validation
    #[error("line {line}: {source}")]
    Row {
        /// 1-based line number
        line: usize,
        /// Underlying grade error
        source: GradeError,
    },
}

/// Parse a transcript CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or any row is invalid.
pub fn parse_transcript_csv<P: AsRef<Path>>(path: P) -> Result<Transcript, TranscriptError> {
    let content = fs::read_to_string(path)?;
    parse_transcript_str(&content)
}

/// Parse transcript CSV content
///
/// # Errors
/// Returns an error if the `Courses` section is missing, a metadata number is
/// malformed, or any course row is invalid.
pub fn parse_transcript_str(content: &str) -> Result<Transcript, TranscriptError> {
    let lines: Vec<&str> = content.lines().collect();

    let courses_start = lines
        .iter()
        .position(|line| parse_csv_line(line).first().is_some_and(|f| f.eq_ignore_ascii_case("courses")))
        .ok_or_else(|| TranscriptError::Format("No 'Courses' section found in transcript".to_string()))?;

    let mut transcript = parse_metadata(&lines[..courses_start])?;

    let header_idx = lines
        .iter()
        .enumerate()
        .skip(courses_start + 1)
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(idx, _)| idx)
        .ok_or_else(|| TranscriptError::Format("No course header found".to_string()))?;
    let headers = parse_csv_line(lines[header_idx]);

    for header in ["Grade", "Credits"] {
        if column(&headers, header).is_none() {
            return Err(TranscriptError::Format(format!(
                "Course header is missing the '{header}' column"
            )));
        }
    }

    for (idx, line) in lines.iter().enumerate().skip(header_idx + 1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_csv_line(line);
        if fields.iter().all(String::is_empty) {
            continue;
        }

        let entry = parse_course_row(&fields, &headers)
            .map_err(|source| TranscriptError::Row { line: idx + 1, source })?;
        let semester = get_field(&fields, "Semester", &headers)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEMESTER);
        transcript.semester_mut_or_insert(semester).add(entry);
    }

    crate::debug!(
        "Parsed transcript with {} semesters and {} entries",
        transcript.semesters.len(),
        transcript.entry_count()
    );

    Ok(transcript)
}

fn parse_metadata(lines: &[&str]) -> Result<Transcript, TranscriptError> {
    let mut transcript = Transcript::new();
    let mut base_cgpa: Option<f64> = None;
    let mut base_credits: Option<f64> = None;

    for line in lines {
        let parts = parse_csv_line(line);
        if parts.len() < 2 || parts[1].is_empty() {
            continue;
        }

        let key = parts[0].to_lowercase();
        let value = parts[1].clone();

        match key.as_str() {
            "student" | "name" => transcript.student = Some(value),
            "program" => transcript.program = Some(value),
            "base cgpa" => base_cgpa = Some(parse_number(&key, &value)?),
            "base credits" => base_credits = Some(parse_number(&key, &value)?),
            _ => crate::debug!("Ignoring unknown transcript metadata '{}'", parts[0]),
        }
    }

    match (base_cgpa, base_credits) {
        (Some(cgpa), Some(credits)) => {
            transcript.base = Some(BaseRecord::new(cgpa, credits).map_err(TranscriptError::Base)?);
        }
        (None, None) => {}
        _ => {
            return Err(TranscriptError::Format(
                "'Base CGPA' and 'Base Credits' must be given together".to_string(),
            ))
        }
    }

    Ok(transcript)
}

fn parse_number(key: &str, value: &str) -> Result<f64, TranscriptError> {
    value.parse::<f64>().map_err(|_| TranscriptError::Metadata {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_course_row(fields: &[String], headers: &[String]) -> Result<CourseEntry, GradeError> {
    let credits_str = get_field(fields, "Credits", headers).unwrap_or_default();
    let credits = credits_str
        .parse::<f64>()
        .map_err(|_| GradeError::InvalidCredits(credits_str.to_string()))?;

    let is_thesis = get_field(fields, "Thesis", headers).is_some_and(parse_flag);
    let entry = if is_thesis {
        CourseEntry::thesis(credits)?
    } else {
        let grade = get_field(fields, "Grade", headers).unwrap_or_default();
        CourseEntry::from_input(grade.parse()?, credits)?
    };

    Ok(match get_field(fields, "Course", headers) {
        Some(name) => entry.with_name(name),
        None => entry,
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "x"
    )
}

/// Split a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .map(std::string::ToString::to_string)
        .collect()
}

fn column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/// Get a field value by header name
fn get_field<'a>(fields: &'a [String], header_name: &str, headers: &[String]) -> Option<&'a str> {
    column(headers, header_name)
        .and_then(|idx| fields.get(idx))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::LetterGrade;

    const SAMPLE: &str = "\
Student,Jane Doe
Program,msc-thesis
Courses
Semester,Course,Grade,Credits,Thesis
Fall 2024,CS 500,A-,3,
Fall 2024,CS 510,88,3,

Spring 2025,CS 699,,6,yes
";

    #[test]
    fn test_parse_csv_line() {
        let fields = parse_csv_line("Fall 2024, CS 500 ,A-,3,");
        assert_eq!(fields, vec!["Fall 2024", "CS 500", "A-", "3", ""]);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("Yes"));
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("no"));
    }

    #[test]
    fn test_parse_sample() {
        let transcript = parse_transcript_str(SAMPLE).unwrap();

        assert_eq!(transcript.student.as_deref(), Some("Jane Doe"));
        assert_eq!(transcript.program.as_deref(), Some("msc-thesis"));
        assert!(transcript.base.is_none());
        assert_eq!(transcript.semesters.len(), 2);

        let fall = &transcript.semesters[0];
        assert_eq!(fall.label, "Fall 2024");
        assert_eq!(fall.entries.len(), 2);
        assert_eq!(fall.entries[1].grade, LetterGrade::AMinus);
        assert_eq!(fall.entries[1].source_score, Some(88.0));

        let spring = &transcript.semesters[1];
        assert!(spring.entries[0].thesis);
        assert_eq!(spring.entries[0].name.as_deref(), Some("CS 699"));
    }

    #[test]
    fn test_missing_courses_section() {
        let err = parse_transcript_str("Student,Jane\n").unwrap_err();
        assert!(matches!(err, TranscriptError::Format(_)));
    }

    #[test]
    fn test_missing_credit_column() {
        let err = parse_transcript_str("Courses\nSemester,Grade\nFall,A\n").unwrap_err();
        assert!(err.to_string().contains("Credits"));
    }

    #[test]
    fn test_bad_row_reports_line() {
        let content = "Courses\nGrade,Credits\nA,3\nQ,3\n";
        match parse_transcript_str(content) {
            Err(TranscriptError::Row { line, source }) => {
                assert_eq!(line, 4);
                assert_eq!(source, GradeError::UnknownLetter("Q".to_string()));
            }
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn test_rows_without_semester_use_default() {
        let transcript = parse_transcript_str("Courses\nGrade,Credits\nB,3\n").unwrap();
        assert_eq!(transcript.semesters[0].label, DEFAULT_SEMESTER);
    }

    #[test]
    fn test_base_record_metadata() {
        let content = "Base CGPA,3.2\nBase Credits,40\nCourses\nGrade,Credits\nA,4\n";
        let transcript = parse_transcript_str(content).unwrap();
        let base = transcript.base.unwrap();
        assert!((base.cgpa - 3.2).abs() < f64::EPSILON);
        assert!((base.credits - 40.0).abs() < f64::EPSILON);

        let half = "Base CGPA,3.2\nCourses\nGrade,Credits\nA,4\n";
        assert!(matches!(
            parse_transcript_str(half),
            Err(TranscriptError::Format(_))
        ));

        let bad = "Base CGPA,high\nBase Credits,40\nCourses\nGrade,Credits\n";
        assert!(matches!(
            parse_transcript_str(bad),
            Err(TranscriptError::Metadata { .. })
        ));
    }
}
