//! CLI argument definitions for `cgpacalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_calc::config::ConfigOverrides;
use cgpa_calc::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `program`, `decimals`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Print the score-to-letter grading scale.
    Scale,
    /// List the built-in program presets.
    Programs,
    /// Compute the CGPA of a list of courses.
    ///
    /// Entries are written `GRADE:CREDITS`, where GRADE is a letter (`A-`) or
    /// a score (`88`), e.g. `cgpacalc calc A:3 B+:4 91:3`.
    Calc {
        /// Course entries as `GRADE:CREDITS`
        #[arg(value_name = "ENTRY")]
        entries: Vec<String>,

        /// Read entries from a transcript CSV file
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Credits the entries should add up to (defaults to the program's requirement)
        #[arg(long, value_name = "CREDITS")]
        target_credits: Option<f64>,

        /// Ungraded thesis credits to count toward the target
        #[arg(long, value_name = "CREDITS")]
        thesis_credits: Option<f64>,
    },
    /// Project a future CGPA from an existing standing.
    Project {
        /// Current CGPA
        #[arg(long, value_name = "CGPA")]
        base_cgpa: f64,

        /// Credits behind the current CGPA
        #[arg(long, value_name = "CREDITS")]
        base_credits: f64,

        /// New course entries as `GRADE:CREDITS`
        #[arg(value_name = "ENTRY")]
        entries: Vec<String>,

        /// Read new entries from a transcript CSV file
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// CGPA to aim for (requires --remaining-credits)
        #[arg(long, value_name = "CGPA", requires = "remaining_credits")]
        target_cgpa: Option<f64>,

        /// Credits still to be taken after the new entries
        #[arg(long, value_name = "CREDITS", requires = "target_cgpa")]
        remaining_credits: Option<f64>,
    },
    /// Evaluate arithmetic with the four-function calculator.
    ///
    /// Evaluation is strictly left to right. Without an expression, reads
    /// keystrokes from stdin line by line and prints the display after each line.
    Eval {
        /// Expression to evaluate, e.g. `12 + 3 * 2`
        #[arg(value_name = "EXPR", allow_hyphen_values = true, allow_negative_numbers = true)]
        expression: Vec<String>,
    },
    /// Generate a transcript report from a CSV file.
    Report {
        /// Path to transcript CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpacalc",
    about = "CGPA calculator command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config program preset
    #[arg(long = "config-program", value_name = "KEY")]
    pub config_program: Option<String>,

    /// Override config program preset (short form)
    #[arg(long = "program", value_name = "KEY")]
    pub program: Option<String>,

    /// Override config display decimals
    #[arg(long = "decimals", value_name = "N")]
    pub decimals: Option<u32>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--program`) take precedence over long-form flags
    /// (e.g., `--config-program`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            program: self
                .program
                .clone()
                .or_else(|| self.config_program.clone()),
            decimals: self.decimals,
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
