//! Transcript report generation
//!
//! Reports summarize a transcript: overall CGPA, program progress, a
//! semester-by-semester table with running CGPA, every course line, and the
//! grading scale used. Markdown and HTML are rendered from `askama` templates.

pub mod formats;

use crate::core::cgpa::{format_cgpa, CourseAccumulator, TargetStatus};
use crate::core::grades::grade_bands;
use crate::core::models::{Program, Transcript};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Transcript being reported
    pub transcript: &'a Transcript,
    /// Program preset used for progress, if any
    pub program: Option<&'a Program>,
    /// Decimals used for CGPA values
    pub decimals: u32,
}

/// One row of the semester table
#[derive(Debug, Clone)]
pub struct SemesterRow {
    /// Semester label
    pub label: String,
    /// Number of entries
    pub courses: usize,
    /// Graded credits this term
    pub credits: String,
    /// Term GPA
    pub term_gpa: String,
    /// Running CGPA after this term
    pub cumulative: String,
}

/// One row of the course table
#[derive(Debug, Clone)]
pub struct CourseRow {
    /// Semester label
    pub semester: String,
    /// Course name or `-`
    pub name: String,
    /// Grade text (letter, score, or THESIS)
    pub grade: String,
    /// Credit hours
    pub credits: String,
    /// Quality points, `-` for thesis entries
    pub points: String,
}

/// One row of the grading-scale legend
#[derive(Debug, Clone)]
pub struct ScaleRow {
    /// Score range (e.g. `90-<97`)
    pub range: String,
    /// Letter label
    pub letter: String,
    /// Point value
    pub point: String,
}

/// Pre-formatted values consumed by the templates
#[derive(Debug, Clone)]
pub struct ReportView {
    /// Student name or empty
    pub student: String,
    /// Program display name or empty
    pub program: String,
    /// Overall CGPA text
    pub cgpa: String,
    /// Graded credit total
    pub graded_credits: String,
    /// Thesis credit total
    pub thesis_credits: String,
    /// Number of entries
    pub course_count: usize,
    /// Base record line or empty
    pub base: String,
    /// Progress message against the program, or empty
    pub progress: String,
    /// Semester table rows
    pub semesters: Vec<SemesterRow>,
    /// Course table rows
    pub courses: Vec<CourseRow>,
    /// Grading scale rows
    pub scale: Vec<ScaleRow>,
    /// Tool version
    pub version: String,
}

fn credits_text(value: f64) -> String {
    format!("{value:.1}")
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(transcript: &'a Transcript, program: Option<&'a Program>, decimals: u32) -> Self {
        Self {
            transcript,
            program,
            decimals,
        }
    }

    /// Totals across the whole transcript
    #[must_use]
    pub fn totals(&self) -> CourseAccumulator {
        self.transcript.totals()
    }

    /// Progress against the program's required credits
    #[must_use]
    pub fn target_status(&self) -> Option<TargetStatus> {
        let totals = self.totals();
        self.program
            .map(|p| TargetStatus::evaluate(totals.total_credits(), p.required_credits))
    }

    /// Headline CGPA, `--` when there is no data or the program target is exceeded
    #[must_use]
    pub fn cgpa_text(&self) -> String {
        if self.target_status().is_some_and(|status| status.is_error()) {
            return format_cgpa(None, self.decimals);
        }
        format_cgpa(self.totals().cgpa(), self.decimals)
    }

    /// Build the formatted view used by templates
    #[must_use]
    pub fn view(&self) -> ReportView {
        let totals = self.totals();

        let semesters = self
            .transcript
            .cumulative_by_semester()
            .into_iter()
            .zip(&self.transcript.semesters)
            .map(|(standing, semester)| SemesterRow {
                label: standing.label,
                courses: semester.entries.len(),
                credits: credits_text(semester.graded_credits()),
                term_gpa: format_cgpa(standing.term_gpa, self.decimals),
                cumulative: format_cgpa(standing.cumulative, self.decimals),
            })
            .collect();

        let courses = self
            .transcript
            .semesters
            .iter()
            .flat_map(|semester| {
                semester.entries.iter().map(move |entry| CourseRow {
                    semester: semester.label.clone(),
                    name: entry.name.clone().unwrap_or_else(|| "-".to_string()),
                    grade: entry.grade_label(),
                    credits: credits_text(entry.credits),
                    points: if entry.thesis {
                        "-".to_string()
                    } else {
                        format!("{:.2}", entry.quality_points())
                    },
                })
            })
            .collect();

        let scale = grade_bands()
            .iter()
            .map(|band| ScaleRow {
                range: band.range_label(),
                letter: band.letter.to_string(),
                point: format!("{:.1}", band.letter.point()),
            })
            .collect();

        let base = self.transcript.base.map_or_else(String::new, |b| {
            format!(
                "{} over {} credits",
                format_cgpa(Some(b.cgpa), self.decimals),
                credits_text(b.credits)
            )
        });

        ReportView {
            student: self.transcript.student.clone().unwrap_or_default(),
            program: self.program.map_or_else(String::new, |p| p.name.to_string()),
            cgpa: self.cgpa_text(),
            graded_credits: credits_text(totals.credits),
            thesis_credits: credits_text(totals.thesis_credits),
            course_count: totals.courses,
            base,
            progress: self
                .target_status()
                .map_or_else(String::new, |status| status.to_string()),
            semesters,
            courses,
            scale,
            version: crate::core::get_version().to_string(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{BaseRecord, CourseEntry};
    use crate::core::grades::LetterGrade;

    fn sample() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.student = Some("Jane Doe".to_string());
        transcript.base = Some(BaseRecord::new(3.0, 10.0).unwrap());
        transcript
            .semester_mut_or_insert("Fall")
            .add(CourseEntry::new(LetterGrade::A, 10.0).unwrap().with_name("CS 500"));
        transcript
            .semester_mut_or_insert("Spring")
            .add(CourseEntry::thesis(6.0).unwrap());
        transcript
    }

    #[test]
    fn test_view_values() {
        let transcript = sample();
        let program = Program::find("msc-thesis");
        let ctx = ReportContext::new(&transcript, program, 2);
        let view = ctx.view();

        assert_eq!(view.student, "Jane Doe");
        assert_eq!(view.program, "Master of Science (Thesis)");
        assert_eq!(view.cgpa, "3.50");
        assert_eq!(view.graded_credits, "20.0");
        assert_eq!(view.thesis_credits, "6.0");
        assert_eq!(view.course_count, 2);
        assert_eq!(view.base, "3.00 over 10.0 credits");
        assert_eq!(view.semesters.len(), 2);
        assert_eq!(view.semesters[1].term_gpa, "--");
        assert_eq!(view.semesters[1].cumulative, "3.50");
        assert_eq!(view.courses[1].grade, "THESIS");
        assert_eq!(view.courses[1].points, "-");
        assert_eq!(view.scale.len(), 13);
    }

    #[test]
    fn test_target_status_uses_total_credits() {
        let transcript = sample();
        let ctx = ReportContext::new(&transcript, Program::find("msc-thesis"), 2);
        // 10 base + 10 graded + 6 thesis out of 36
        assert_eq!(ctx.target_status(), Some(TargetStatus::Remaining(10.0)));

        let ctx = ReportContext::new(&transcript, None, 2);
        assert!(ctx.target_status().is_none());
        assert!(ctx.view().progress.is_empty());
    }

    #[test]
    fn test_exceeded_target_withholds_cgpa() {
        let mut transcript = Transcript::new();
        transcript
            .semester_mut_or_insert("Fall")
            .add(CourseEntry::new(LetterGrade::A, 40.0).unwrap());
        let ctx = ReportContext::new(&transcript, Program::find("msc-course"), 2);
        let view = ctx.view();

        assert!(ctx.target_status().is_some_and(|status| status.is_error()));
        assert_eq!(view.cgpa, "--");
        assert_eq!(view.progress, "Total credits (40) exceeds target (36)");
        assert_eq!(view.semesters[0].cumulative, "4.00");

        let ctx = ReportContext::new(&transcript, None, 2);
        assert_eq!(ctx.cgpa_text(), "4.00");
    }
}
