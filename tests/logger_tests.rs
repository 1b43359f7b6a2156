//! Integration tests for logger behavior.

use cgpa_calc::logger::{init_file_logging, set_level, set_level_from_str, Level};
use cgpa_calc::{debug, error, get_version, info, warn};
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_opens_target() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cgpacalc.log");

    assert!(init_file_logging(&path));
    error!("written to file");
    assert!(path.exists());
}

#[cfg(not(feature = "file-logging"))]
#[test]
fn file_logging_disabled() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    assert!(!init_file_logging(&temp_dir.path().join("cgpacalc.log")));
}

#[test]
fn version_is_not_empty() {
    assert!(!get_version().trim().is_empty());
}
