//! Project command handler

use super::{collect_entries, fail};
use cgpa_calc::config::Config;
use cgpa_calc::core::cgpa::{format_cgpa, format_credits};
use cgpa_calc::core::grades::MAX_POINT;
use cgpa_calc::core::models::BaseRecord;
use cgpa_calc::core::projection::{project, required_average};
use std::path::Path;

/// Arguments of the project command
pub struct ProjectRequest<'a> {
    /// Current CGPA
    pub base_cgpa: f64,
    /// Credits behind the current CGPA
    pub base_credits: f64,
    /// New entries typed on the command line
    pub entries: &'a [String],
    /// Optional transcript file with new entries
    pub file: Option<&'a Path>,
    /// Target CGPA and the credits left to reach it
    pub target: Option<(f64, f64)>,
}

/// Run the project command
pub fn run(request: &ProjectRequest, config: &Config) {
    if let Err(e) = run_projection(request, config) {
        fail(&e);
    }
}

fn run_projection(request: &ProjectRequest, config: &Config) -> Result<(), String> {
    let decimals = config.grading.decimals;
    let base = BaseRecord::new(request.base_cgpa, request.base_credits)
        .map_err(|e| format!("Invalid base record: {e}"))?;
    let entries = collect_entries(request.entries, request.file)?;

    let acc = project(&base, &entries);
    println!(
        "Base CGPA: {} over {} credits",
        format_cgpa(Some(base.cgpa), decimals),
        format_credits(base.credits)
    );
    println!(
        "Projected CGPA: {} over {} credits",
        format_cgpa(acc.cgpa(), decimals),
        format_credits(acc.credits)
    );

    if let Some((target_cgpa, remaining)) = request.target {
        // The new entries become part of the standing the target is measured from
        let standing = acc.cgpa().unwrap_or(0.0).clamp(0.0, MAX_POINT);
        let outlook = required_average(standing, acc.credits, remaining, target_cgpa)
            .map_err(|e| e.to_string())?;
        let required = format_cgpa(Some(outlook.required), decimals);
        let remaining = format_credits(remaining);
        if outlook.reachable {
            println!(
                "✓ Target {} needs an average of {required} over the next {remaining} credits",
                format_cgpa(Some(target_cgpa), decimals)
            );
        } else {
            println!(
                "✗ Target {} is out of reach: it would need {required} over the next {remaining} credits",
                format_cgpa(Some(target_cgpa), decimals)
            );
        }
    }

    Ok(())
}
