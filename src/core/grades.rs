//! Grade table: letter grades, their point values and score bands

use super::error::GradeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest point value on the scale
pub const MAX_POINT: f64 = 4.0;

/// Highest accepted numeric score
pub const MAX_SCORE: f64 = 100.0;

/// One of the 13 letter grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// A+ (4.0)
    #[serde(rename = "A+")]
    APlus,
    /// A (4.0)
    A,
    /// A- (3.7)
    #[serde(rename = "A-")]
    AMinus,
    /// B+ (3.3)
    #[serde(rename = "B+")]
    BPlus,
    /// B (3.0)
    B,
    /// B- (2.7)
    #[serde(rename = "B-")]
    BMinus,
    /// C+ (2.3)
    #[serde(rename = "C+")]
    CPlus,
    /// C (2.0)
    C,
    /// C- (1.7)
    #[serde(rename = "C-")]
    CMinus,
    /// D+ (1.3)
    #[serde(rename = "D+")]
    DPlus,
    /// D (1.0)
    D,
    /// D- (0.7)
    #[serde(rename = "D-")]
    DMinus,
    /// F (0.0)
    F,
}

impl LetterGrade {
    /// Every grade, best first
    pub const ALL: [Self; 13] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// Grade-point value of this letter
    #[must_use]
    pub const fn point(self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::DMinus => 0.7,
            Self::F => 0.0,
        }
    }

    /// Display label (e.g. `"B+"`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LetterGrade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|grade| grade.label() == wanted)
            .ok_or_else(|| GradeError::UnknownLetter(s.trim().to_string()))
    }
}

/// Point value of a letter grade
#[must_use]
pub const fn letter_to_point(grade: LetterGrade) -> f64 {
    grade.point()
}

/// A score range mapped to a letter. `min` is inclusive, `max` exclusive
/// except for the top band, which includes 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Lowest score in the band
    pub min: f64,
    /// Upper bound of the band
    pub max: f64,
    /// Letter awarded for scores in the band
    pub letter: LetterGrade,
}

const GRADE_BANDS: [GradeBand; 13] = [
    GradeBand { min: 97.0, max: 100.0, letter: LetterGrade::APlus },
    GradeBand { min: 90.0, max: 97.0, letter: LetterGrade::A },
    GradeBand { min: 85.0, max: 90.0, letter: LetterGrade::AMinus },
    GradeBand { min: 80.0, max: 85.0, letter: LetterGrade::BPlus },
    GradeBand { min: 75.0, max: 80.0, letter: LetterGrade::B },
    GradeBand { min: 70.0, max: 75.0, letter: LetterGrade::BMinus },
    GradeBand { min: 65.0, max: 70.0, letter: LetterGrade::CPlus },
    GradeBand { min: 60.0, max: 65.0, letter: LetterGrade::C },
    GradeBand { min: 57.0, max: 60.0, letter: LetterGrade::CMinus },
    GradeBand { min: 55.0, max: 57.0, letter: LetterGrade::DPlus },
    GradeBand { min: 52.0, max: 55.0, letter: LetterGrade::D },
    GradeBand { min: 50.0, max: 52.0, letter: LetterGrade::DMinus },
    GradeBand { min: 0.0, max: 50.0, letter: LetterGrade::F },
];

/// Score bands, highest first
#[must_use]
pub const fn grade_bands() -> &'static [GradeBand] {
    &GRADE_BANDS
}

impl GradeBand {
    /// Human-readable range such as `90-<97` or `<50`
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.min <= 0.0 {
            format!("<{}", self.max)
        } else if self.max >= MAX_SCORE {
            format!("{}-{}", self.min, self.max)
        } else {
            format!("{}-<{}", self.min, self.max)
        }
    }
}

/// Convert a 0-100 score to a letter grade
///
/// Bands are checked from the top, so a score sitting on a boundary lands in
/// the higher band (97 is `A+`, 90 is `A`).
///
/// # Errors
/// Returns [`GradeError::ScoreOutOfRange`] for scores outside `[0, 100]` or NaN.
pub fn score_to_letter(score: f64) -> Result<LetterGrade, GradeError> {
    if !(0.0..=MAX_SCORE).contains(&score) {
        return Err(GradeError::ScoreOutOfRange(score));
    }
    Ok(GRADE_BANDS
        .iter()
        .find(|band| score >= band.min)
        .map_or(LetterGrade::F, |band| band.letter))
}

/// A grade as entered: either a letter or a numeric score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeInput {
    /// Letter grade entered directly
    Letter(LetterGrade),
    /// Numeric score in `[0, 100]`
    Score(f64),
}

impl GradeInput {
    /// Resolve to a letter grade, converting scores through the band table
    ///
    /// # Errors
    /// Returns an error if a score is out of range.
    pub fn resolve(self) -> Result<LetterGrade, GradeError> {
        match self {
            Self::Letter(grade) => Ok(grade),
            Self::Score(score) => score_to_letter(score),
        }
    }

    /// The raw score, if this input was numeric
    #[must_use]
    pub const fn score(self) -> Option<f64> {
        match self {
            Self::Letter(_) => None,
            Self::Score(score) => Some(score),
        }
    }
}

impl FromStr for GradeInput {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<f64>() {
            Ok(score) => Ok(Self::Score(score)),
            Err(_) => trimmed.parse::<LetterGrade>().map(Self::Letter),
        }
    }
}
