//! Course accumulation and CGPA computation

use crate::core::models::CourseEntry;
use std::fmt;

/// Tolerance used when comparing accumulated credit totals
const CREDIT_EPSILON: f64 = 1e-9;

/// Running sums of quality points and credits
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CourseAccumulator {
    /// Σ(point × credits) over graded entries
    pub points: f64,
    /// Σ(credits) over graded entries
    pub credits: f64,
    /// Σ(credits) over thesis entries
    pub thesis_credits: f64,
    /// Number of entries added (graded and thesis)
    pub courses: usize,
}

impl CourseAccumulator {
    /// Create an empty accumulator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: 0.0,
            credits: 0.0,
            thesis_credits: 0.0,
            courses: 0,
        }
    }

    /// Accumulate every entry in `entries`
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CourseEntry>) -> Self {
        let mut acc = Self::new();
        acc.extend(entries);
        acc
    }

    /// Add one entry
    pub fn add(&mut self, entry: &CourseEntry) {
        if entry.thesis {
            self.thesis_credits += entry.credits;
        } else {
            self.points += entry.quality_points();
            self.credits += entry.credits;
        }
        self.courses += 1;
    }

    /// Add several entries
    pub fn extend<'a>(&mut self, entries: impl IntoIterator<Item = &'a CourseEntry>) {
        for entry in entries {
            self.add(entry);
        }
    }

    /// Add an implicit graded entry with pre-multiplied points
    pub fn seed(&mut self, points: f64, credits: f64) {
        self.points += points;
        self.credits += credits;
    }

    /// Graded plus thesis credits
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.credits + self.thesis_credits
    }

    /// `points / credits`, or `None` when no graded credits were accumulated
    #[must_use]
    pub fn cgpa(&self) -> Option<f64> {
        (self.credits > 0.0).then(|| self.points / self.credits)
    }
}

/// CGPA of a sequence of entries
///
/// Thesis entries are ignored. Returns `None` for empty input or when the
/// graded credits sum to zero.
#[must_use]
pub fn cgpa<'a>(entries: impl IntoIterator<Item = &'a CourseEntry>) -> Option<f64> {
    CourseAccumulator::from_entries(entries).cgpa()
}

/// Format a CGPA for display, `--` when there is no data
#[must_use]
pub fn format_cgpa(value: Option<f64>, decimals: u32) -> String {
    value.map_or_else(
        || "--".to_string(),
        |v| format!("{v:.prec$}", prec = decimals as usize),
    )
}

/// Format a credit amount rounded to two decimals without trailing zeros
///
/// `12.0` prints as `12` and `3.1 + 3.3` as `6.4`.
#[must_use]
pub fn format_credits(credits: f64) -> String {
    let text = format!("{credits:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Result of a CGPA computation ready for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CgpaSummary {
    /// Computed CGPA
    pub cgpa: Option<f64>,
    /// Graded credits behind the CGPA
    pub graded_credits: f64,
    /// Thesis credits counted toward progress
    pub thesis_credits: f64,
    /// Number of entries
    pub courses: usize,
    /// Decimals used by `Display`
    pub decimals: u32,
}

impl CgpaSummary {
    /// Build a summary from accumulated totals
    #[must_use]
    pub fn from_accumulator(acc: &CourseAccumulator, decimals: u32) -> Self {
        Self {
            cgpa: acc.cgpa(),
            graded_credits: acc.credits,
            thesis_credits: acc.thesis_credits,
            courses: acc.courses,
            decimals,
        }
    }

    /// Total credits (graded and thesis) counted toward a target
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.graded_credits + self.thesis_credits
    }
}

impl fmt::Display for CgpaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current CGPA: {}", format_cgpa(self.cgpa, self.decimals))
    }
}

/// Summarize entries with the default two decimals
#[must_use]
pub fn summarize<'a>(entries: impl IntoIterator<Item = &'a CourseEntry>) -> CgpaSummary {
    CgpaSummary::from_accumulator(&CourseAccumulator::from_entries(entries), 2)
}

/// Credit progress against a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetStatus {
    /// Accumulated credits match the target
    Complete,
    /// Credits still missing
    Remaining(f64),
    /// More credits entered than the target allows
    Exceeded {
        /// Credits entered
        accumulated: f64,
        /// Target credits
        target: f64,
    },
}

impl TargetStatus {
    /// Compare accumulated credits with a target
    #[must_use]
    pub fn evaluate(accumulated: f64, target: f64) -> Self {
        let diff = target - accumulated;
        if diff.abs() <= CREDIT_EPSILON {
            Self::Complete
        } else if diff > 0.0 {
            Self::Remaining(diff)
        } else {
            Self::Exceeded {
                accumulated,
                target,
            }
        }
    }

    /// Whether the CGPA should be withheld
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "All target credits entered"),
            Self::Remaining(remaining) => {
                let plural = if (*remaining - 1.0).abs() <= CREDIT_EPSILON {
                    ""
                } else {
                    "s"
                };
                write!(
                    f,
                    "Still need to add {} more credit{plural}",
                    format_credits(*remaining)
                )
            }
            Self::Exceeded {
                accumulated,
                target,
            } => write!(
                f,
                "Total credits ({}) exceeds target ({})",
                format_credits(*accumulated),
                format_credits(*target)
            ),
        }
    }
}
