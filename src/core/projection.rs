//! Future-CGPA projection from an existing standing

use crate::core::cgpa::CourseAccumulator;
use crate::core::error::GradeError;
use crate::core::grades::MAX_POINT;
use crate::core::models::semester::validate_cgpa;
use crate::core::models::{BaseRecord, CourseEntry};

/// Projected CGPA after adding `new_entries` to an existing standing
///
/// Equivalent to computing the CGPA of an implicit entry worth `base_credits`
/// at grade-point `base_cgpa`, followed by `new_entries`. Returns `Ok(None)`
/// when the combined graded credits are zero.
///
/// # Errors
/// Returns an error if `base_cgpa` is outside `[0, 4]` or `base_credits` is
/// negative or not finite.
pub fn projected_cgpa<'a>(
    base_cgpa: f64,
    base_credits: f64,
    new_entries: impl IntoIterator<Item = &'a CourseEntry>,
) -> Result<Option<f64>, GradeError> {
    let base = BaseRecord::new(base_cgpa, base_credits)?;
    Ok(project(&base, new_entries).cgpa())
}

/// Accumulated totals for a base record followed by new entries
#[must_use]
pub fn project<'a>(
    base: &BaseRecord,
    new_entries: impl IntoIterator<Item = &'a CourseEntry>,
) -> CourseAccumulator {
    let mut acc = CourseAccumulator::new();
    acc.seed(base.points(), base.credits);
    acc.extend(new_entries);
    acc
}

/// Average needed over the remaining credits to reach a target CGPA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetOutlook {
    /// Grade-point average required over the remaining credits (never below 0)
    pub required: f64,
    /// Whether `required` is attainable on the 4.0 scale
    pub reachable: bool,
}

/// Average required over `remaining_credits` to finish at `target_cgpa`
///
/// # Errors
/// Returns an error if `remaining_credits` is not positive, or if any CGPA
/// or credit argument is invalid.
pub fn required_average(
    base_cgpa: f64,
    base_credits: f64,
    remaining_credits: f64,
    target_cgpa: f64,
) -> Result<TargetOutlook, GradeError> {
    let base = BaseRecord::new(base_cgpa, base_credits)?;
    let target = validate_cgpa(target_cgpa)?;
    if !remaining_credits.is_finite() || remaining_credits <= 0.0 {
        return Err(GradeError::NoRemainingCredits);
    }

    let needed_points = target.mul_add(base.credits + remaining_credits, -base.points());
    let required = (needed_points / remaining_credits).max(0.0);

    Ok(TargetOutlook {
        required,
        reachable: required <= MAX_POINT + 1e-9,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cgpa::cgpa;
    use crate::core::grades::LetterGrade;

    fn entry(grade: LetterGrade, credits: f64) -> CourseEntry {
        CourseEntry::new(grade, credits).unwrap()
    }

    #[test]
    fn test_projection_blends_base() {
        let entries = vec![entry(LetterGrade::A, 15.0)];
        // (3.0 * 45 + 4.0 * 15) / 60
        let projected = projected_cgpa(3.0, 45.0, &entries).unwrap().unwrap();
        assert!((projected - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_zero_base_credits_matches_plain_cgpa() {
        let entries = vec![entry(LetterGrade::BPlus, 3.0), entry(LetterGrade::C, 4.0)];
        let projected = projected_cgpa(3.9, 0.0, &entries).unwrap();
        assert_eq!(projected, cgpa(&entries));
    }

    #[test]
    fn test_no_new_entries_keeps_base() {
        let entries: Vec<CourseEntry> = Vec::new();
        let projected = projected_cgpa(3.42, 60.0, &entries).unwrap().unwrap();
        assert!((projected - 3.42).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_is_no_data() {
        let entries: Vec<CourseEntry> = Vec::new();
        assert_eq!(projected_cgpa(0.0, 0.0, &entries), Ok(None));
    }

    #[test]
    fn test_projection_validates_base() {
        let entries: Vec<CourseEntry> = Vec::new();
        assert_eq!(
            projected_cgpa(4.5, 10.0, &entries),
            Err(GradeError::InvalidCgpa(4.5))
        );
        assert!(projected_cgpa(3.0, -10.0, &entries).is_err());
    }

    #[test]
    fn test_projection_ignores_thesis_in_mean() {
        let entries = vec![CourseEntry::thesis(9.0).unwrap()];
        let projected = projected_cgpa(3.5, 27.0, &entries).unwrap().unwrap();
        assert!((projected - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_required_average() {
        // (3.5 * 60 - 3.0 * 30) / 30 = 4.0
        let outlook = required_average(3.0, 30.0, 30.0, 3.5).unwrap();
        assert!((outlook.required - 4.0).abs() < 1e-9);
        assert!(outlook.reachable);

        let outlook = required_average(2.0, 90.0, 10.0, 3.5).unwrap();
        assert!(outlook.required > 4.0);
        assert!(!outlook.reachable);
    }

    #[test]
    fn test_required_average_already_secured() {
        let outlook = required_average(4.0, 100.0, 1.0, 2.0).unwrap();
        assert!(outlook.required.abs() < f64::EPSILON);
        assert!(outlook.reachable);
    }

    #[test]
    fn test_required_average_needs_remaining_credits() {
        assert_eq!(
            required_average(3.0, 30.0, 0.0, 3.5),
            Err(GradeError::NoRemainingCredits)
        );
        assert!(required_average(3.0, 30.0, 10.0, 5.0).is_err());
    }
}
