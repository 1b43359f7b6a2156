//! Course entry model

use crate::core::error::GradeError;
use crate::core::grades::{GradeInput, LetterGrade};
use std::str::FromStr;

/// One graded (or thesis) course line
#[derive(Debug, Clone, PartialEq)]
pub struct CourseEntry {
    /// Course name or code (e.g., "CS 2510"), if known
    pub name: Option<String>,

    /// Letter grade used for the point lookup
    pub grade: LetterGrade,

    /// Credit hours (can be fractional)
    pub credits: f64,

    /// Score the letter was derived from, when entered numerically
    pub source_score: Option<f64>,

    /// Ungraded thesis credits: counted toward progress, excluded from the CGPA
    pub thesis: bool,
}

/// Validate a credit-hour value
///
/// # Errors
/// Returns [`GradeError::InvalidCredits`] for negative or non-finite values.
pub fn validate_credits(credits: f64) -> Result<f64, GradeError> {
    if credits.is_finite() && credits >= 0.0 {
        Ok(credits)
    } else {
        Err(GradeError::InvalidCredits(credits.to_string()))
    }
}

impl CourseEntry {
    /// Create a graded entry
    ///
    /// # Errors
    /// Returns an error if `credits` is negative or not finite.
    pub fn new(grade: LetterGrade, credits: f64) -> Result<Self, GradeError> {
        Ok(Self {
            name: None,
            grade,
            credits: validate_credits(credits)?,
            source_score: None,
            thesis: false,
        })
    }

    /// Create a graded entry from a letter or score input
    ///
    /// # Errors
    /// Returns an error if the score is out of range or the credits are invalid.
    pub fn from_input(input: GradeInput, credits: f64) -> Result<Self, GradeError> {
        let mut entry = Self::new(input.resolve()?, credits)?;
        entry.source_score = input.score();
        Ok(entry)
    }

    /// Create an ungraded thesis entry
    ///
    /// # Errors
    /// Returns an error if `credits` is negative or not finite.
    pub fn thesis(credits: f64) -> Result<Self, GradeError> {
        Ok(Self {
            name: None,
            grade: LetterGrade::F,
            credits: validate_credits(credits)?,
            source_score: None,
            thesis: true,
        })
    }

    /// Attach a course name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.name = Some(name.trim().to_string());
        }
        self
    }

    /// Weighted points contributed to the CGPA (zero for thesis entries)
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        if self.thesis {
            0.0
        } else {
            self.grade.point() * self.credits
        }
    }

    /// Grade column text: letter, the score it came from, or `THESIS`
    #[must_use]
    pub fn grade_label(&self) -> String {
        if self.thesis {
            return "THESIS".to_string();
        }
        match self.source_score {
            Some(score) => format!("{} ({score})", self.grade),
            None => self.grade.to_string(),
        }
    }
}

impl FromStr for CourseEntry {
    type Err = GradeError;

    /// Parse `GRADE:CREDITS`, where GRADE is a letter or a 0-100 score
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (grade, credits) = s
            .rsplit_once(':')
            .ok_or_else(|| GradeError::MalformedEntry(s.to_string()))?;
        let credits = credits
            .trim()
            .parse::<f64>()
            .map_err(|_| GradeError::InvalidCredits(credits.trim().to_string()))?;
        Self::from_input(grade.parse()?, credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CourseEntry::new(LetterGrade::BPlus, 3.0).unwrap();

        assert_eq!(entry.grade, LetterGrade::BPlus);
        assert!((entry.credits - 3.0).abs() < f64::EPSILON);
        assert!(entry.name.is_none());
        assert!(entry.source_score.is_none());
        assert!(!entry.thesis);
        assert!((entry.quality_points() - 9.9).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_credits() {
        assert!(CourseEntry::new(LetterGrade::A, -1.0).is_err());
        assert!(CourseEntry::new(LetterGrade::A, f64::NAN).is_err());
        assert!(CourseEntry::new(LetterGrade::A, f64::INFINITY).is_err());
        assert!(CourseEntry::new(LetterGrade::A, 0.0).is_ok());
    }

    #[test]
    fn test_parse_letter_entry() {
        let entry: CourseEntry = "A-:4".parse().unwrap();
        assert_eq!(entry.grade, LetterGrade::AMinus);
        assert!((entry.credits - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_score_entry_keeps_score() {
        let entry: CourseEntry = "97:1.5".parse().unwrap();
        assert_eq!(entry.grade, LetterGrade::APlus);
        assert_eq!(entry.source_score, Some(97.0));
        assert_eq!(entry.grade_label(), "A+ (97)");
    }

    #[test]
    fn test_parse_malformed_entries() {
        assert!(matches!(
            "A".parse::<CourseEntry>(),
            Err(GradeError::MalformedEntry(_))
        ));
        assert!(matches!(
            "A:three".parse::<CourseEntry>(),
            Err(GradeError::InvalidCredits(_))
        ));
        assert!(matches!(
            "E:3".parse::<CourseEntry>(),
            Err(GradeError::UnknownLetter(_))
        ));
        assert!(matches!(
            "120:3".parse::<CourseEntry>(),
            Err(GradeError::ScoreOutOfRange(_))
        ));
    }

    #[test]
    fn test_thesis_entry() {
        let entry = CourseEntry::thesis(6.0).unwrap().with_name("Thesis Research");
        assert!(entry.thesis);
        assert!(entry.quality_points().abs() < f64::EPSILON);
        assert_eq!(entry.grade_label(), "THESIS");
        assert_eq!(entry.name.as_deref(), Some("Thesis Research"));
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let entry = CourseEntry::new(LetterGrade::C, 3.0).unwrap().with_name("   ");
        assert!(entry.name.is_none());
    }
}
