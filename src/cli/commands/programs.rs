//! Programs command handler

use cgpa_calc::config::Config;
use cgpa_calc::core::models::Program;

/// List the program presets, marking the configured one
pub fn run(config: &Config) {
    println!("\n=== Programs ===\n");
    for program in Program::presets() {
        let marker = if program.key.eq_ignore_ascii_case(config.grading.program.trim()) {
            "*"
        } else {
            " "
        };
        let thesis = if program.has_thesis() {
            format!(" ({} thesis)", program.thesis_credits)
        } else {
            String::new()
        };
        println!(
            "{marker} {:<12} {:<36} {} credits{thesis}",
            program.key, program.name, program.required_credits
        );
    }
}
