//! Core grade arithmetic shared by the CLI and library users

pub mod calculator;
pub mod cgpa;
pub mod error;
pub mod grades;
pub mod models;
pub mod projection;
pub mod report;
pub mod transcript;

pub use error::GradeError;

/// Returns the current version of the `cgpa-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
