//! Program (degree) presets

use serde::Serialize;

/// A degree program preset with its credit requirements
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Program {
    /// Lookup key used on the command line and in config (e.g., "msc-thesis")
    pub key: &'static str,

    /// Display name (e.g., "Master of Science (Thesis)")
    pub name: &'static str,

    /// Total credits needed to graduate, thesis included
    pub required_credits: f64,

    /// Ungraded thesis credits within `required_credits`
    pub thesis_credits: f64,
}

const PRESETS: [Program; 5] = [
    Program {
        key: "bsc",
        name: "Bachelor of Science",
        required_credits: 130.0,
        thesis_credits: 0.0,
    },
    Program {
        key: "bsc-honours",
        name: "Bachelor of Science (Honours)",
        required_credits: 136.0,
        thesis_credits: 6.0,
    },
    Program {
        key: "msc-thesis",
        name: "Master of Science (Thesis)",
        required_credits: 36.0,
        thesis_credits: 9.0,
    },
    Program {
        key: "msc-course",
        name: "Master of Science (Coursework)",
        required_credits: 36.0,
        thesis_credits: 0.0,
    },
    Program {
        key: "phd",
        name: "Doctor of Philosophy",
        required_credits: 72.0,
        thesis_credits: 48.0,
    },
];

impl Program {
    /// All built-in presets
    #[must_use]
    pub const fn presets() -> &'static [Self] {
        &PRESETS
    }

    /// Find a preset by key (case-insensitive)
    #[must_use]
    pub fn find(key: &str) -> Option<&'static Self> {
        let key = key.trim();
        PRESETS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
    }

    /// Credits that must be earned through graded courses
    #[must_use]
    pub fn graded_credits_required(&self) -> f64 {
        self.required_credits - self.thesis_credits
    }

    /// Whether the program includes a thesis component
    #[must_use]
    pub fn has_thesis(&self) -> bool {
        self.thesis_credits > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_preset() {
        let program = Program::find("MSC-THESIS").unwrap();
        assert_eq!(program.key, "msc-thesis");
        assert!(program.has_thesis());
        assert!((program.graded_credits_required() - 27.0).abs() < f64::EPSILON);
        assert!(Program::find("mba").is_none());
    }

    #[test]
    fn test_presets_are_consistent() {
        for program in Program::presets() {
            assert!(program.required_credits > 0.0, "{}", program.key);
            assert!(program.thesis_credits >= 0.0, "{}", program.key);
            assert!(program.thesis_credits < program.required_credits, "{}", program.key);
        }
    }

    #[test]
    fn test_keys_unique() {
        let presets = Program::presets();
        for (i, a) in presets.iter().enumerate() {
            assert!(presets[i + 1..].iter().all(|b| b.key != a.key));
        }
    }
}
