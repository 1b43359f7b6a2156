//! Command-line interface entry point for `cgpacalc`

mod args;
mod commands;

use args::{Cli, Command};
use cgpa_calc::config::Config;
use cgpa_calc::info;
use cgpa_calc::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use clap::Parser;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let _ = std::fs::create_dir_all(parent);
        }
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Scale => commands::scale::run(),
        Command::Programs => commands::programs::run(&config),
        Command::Calc {
            entries,
            file,
            target_credits,
            thesis_credits,
        } => {
            let request = commands::calc::CalcRequest {
                entries: &entries,
                file: file.as_deref(),
                target_credits,
                thesis_credits,
            };
            commands::calc::run(&request, &config);
        }
        Command::Project {
            base_cgpa,
            base_credits,
            entries,
            file,
            target_cgpa,
            remaining_credits,
        } => {
            let request = commands::project::ProjectRequest {
                base_cgpa,
                base_credits,
                entries: &entries,
                file: file.as_deref(),
                target: target_cgpa.zip(remaining_credits),
            };
            commands::project::run(&request, &config);
        }
        Command::Eval { expression } => commands::eval::run(&expression),
        Command::Report {
            input_file,
            output,
            format,
        } => {
            commands::report::run(&input_file, output.as_deref(), &format, &config);
        }
    }
}
