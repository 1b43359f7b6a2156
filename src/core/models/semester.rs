//! Semester and transcript models

use super::course::{validate_credits, CourseEntry};
use crate::core::cgpa::CourseAccumulator;
use crate::core::error::GradeError;
use crate::core::grades::MAX_POINT;

/// A previously earned standing carried into a projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRecord {
    /// CGPA earned so far
    pub cgpa: f64,
    /// Graded credits behind `cgpa`
    pub credits: f64,
}

/// Validate a CGPA value on the 0-4 scale
///
/// # Errors
/// Returns [`GradeError::InvalidCgpa`] when outside `[0.0, 4.0]` or NaN.
pub fn validate_cgpa(cgpa: f64) -> Result<f64, GradeError> {
    if (0.0..=MAX_POINT).contains(&cgpa) {
        Ok(cgpa)
    } else {
        Err(GradeError::InvalidCgpa(cgpa))
    }
}

impl BaseRecord {
    /// Create a validated base record
    ///
    /// # Errors
    /// Returns an error if the CGPA is off-scale or credits are invalid.
    pub fn new(cgpa: f64, credits: f64) -> Result<Self, GradeError> {
        Ok(Self {
            cgpa: validate_cgpa(cgpa)?,
            credits: validate_credits(credits)?,
        })
    }

    /// Quality points represented by this record
    #[must_use]
    pub fn points(&self) -> f64 {
        self.cgpa * self.credits
    }
}

/// A term's worth of course entries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Semester {
    /// Label such as "Fall 2024"
    pub label: String,
    /// Entries in the order they were added
    pub entries: Vec<CourseEntry>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn add(&mut self, entry: CourseEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, returning it if it existed
    pub fn remove(&mut self, index: usize) -> Option<CourseEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Accumulated totals for this semester alone
    #[must_use]
    pub fn totals(&self) -> CourseAccumulator {
        CourseAccumulator::from_entries(&self.entries)
    }

    /// Term GPA, `None` when the semester has no graded credits
    #[must_use]
    pub fn gpa(&self) -> Option<f64> {
        self.totals().cgpa()
    }

    /// Graded credits taken this semester
    #[must_use]
    pub fn graded_credits(&self) -> f64 {
        self.totals().credits
    }

    /// Thesis credits taken this semester
    #[must_use]
    pub fn thesis_credits(&self) -> f64 {
        self.totals().thesis_credits
    }
}

/// Running standing after a semester
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterStanding {
    /// Semester label
    pub label: String,
    /// Term GPA
    pub term_gpa: Option<f64>,
    /// CGPA including every earlier semester (and the base record)
    pub cumulative: Option<f64>,
    /// Graded credits accumulated so far
    pub cumulative_credits: f64,
}

/// A student's full record: optional base standing plus semesters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    /// Student name, if given
    pub student: Option<String>,
    /// Program preset key, if given
    pub program: Option<String>,
    /// Earlier standing not itemized in `semesters`
    pub base: Option<BaseRecord>,
    /// Semesters in first-seen order
    pub semesters: Vec<Semester>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the semester with `label`, creating it at the end if missing
    pub fn semester_mut_or_insert(&mut self, label: &str) -> &mut Semester {
        let idx = match self.semesters.iter().position(|s| s.label == label) {
            Some(idx) => idx,
            None => {
                self.semesters.push(Semester::new(label));
                self.semesters.len() - 1
            }
        };
        &mut self.semesters[idx]
    }

    /// All entries, semester by semester
    pub fn entries(&self) -> impl Iterator<Item = &CourseEntry> {
        self.semesters.iter().flat_map(|s| s.entries.iter())
    }

    /// Number of entries across all semesters
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.semesters.iter().map(|s| s.entries.len()).sum()
    }

    /// Totals across the base record and every semester
    #[must_use]
    pub fn totals(&self) -> CourseAccumulator {
        let mut acc = self.base_accumulator();
        acc.extend(self.entries());
        acc
    }

    /// Standing after each semester, in order
    #[must_use]
    pub fn cumulative_by_semester(&self) -> Vec<SemesterStanding> {
        let mut acc = self.base_accumulator();
        self.semesters
            .iter()
            .map(|semester| {
                acc.extend(semester.entries.iter());
                SemesterStanding {
                    label: semester.label.clone(),
                    term_gpa: semester.gpa(),
                    cumulative: acc.cgpa(),
                    cumulative_credits: acc.credits,
                }
            })
            .collect()
    }

    fn base_accumulator(&self) -> CourseAccumulator {
        let mut acc = CourseAccumulator::new();
        if let Some(base) = &self.base {
            acc.seed(base.points(), base.credits);
        }
        acc
    }
}
