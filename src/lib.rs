//! Shared library for `cgpa-calc`
//! Contains the grade arithmetic, projection, calculator and configuration used by the CLI

pub mod logger;

pub mod config;
pub mod core;

pub use crate::core::get_version;
