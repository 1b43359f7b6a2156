//! Data models for `cgpa-calc`

pub mod course;
pub mod program;
pub mod semester;

pub use course::CourseEntry;
pub use program::Program;
pub use semester::{BaseRecord, Semester, SemesterStanding, Transcript};
