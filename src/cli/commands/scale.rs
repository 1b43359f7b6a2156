//! Scale command handler

use cgpa_calc::core::grades::grade_bands;

/// Print the grading-scale legend
pub fn run() {
    println!("\n=== Grading Scale ===\n");
    println!("{:<8} {:<6} {}", "Score", "Grade", "Points");
    for band in grade_bands() {
        println!(
            "{:<8} {:<6} {:.1}",
            band.range_label(),
            band.letter,
            band.letter.point()
        );
    }
}
