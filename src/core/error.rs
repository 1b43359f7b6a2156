//! Error types for grade arithmetic

use thiserror::Error;

/// Errors raised while validating grades, credits or projection inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// Letter label outside the 13-grade scale
    #[error("unknown letter grade '{0}' (expected one of A+, A, A-, ..., D-, F)")]
    UnknownLetter(String),

    /// Numeric score outside `[0, 100]` or not finite
    #[error("score {0} is outside the 0-100 range")]
    ScoreOutOfRange(f64),

    /// Credit hours that are negative or not finite
    #[error("invalid credit hours: {0}")]
    InvalidCredits(String),

    /// Entry text that is not `GRADE:CREDITS`
    #[error("invalid course entry '{0}' (expected GRADE:CREDITS, e.g. A-:3 or 88:4)")]
    MalformedEntry(String),

    /// Base or target CGPA outside `[0.0, 4.0]`
    #[error("CGPA {0} is outside the 0.0-4.0 range")]
    InvalidCgpa(f64),

    /// Required-average projection with nothing left to take
    #[error("remaining credits must be greater than zero")]
    NoRemainingCredits,
}
