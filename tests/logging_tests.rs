// Log target and filter selection

use hostwatch::logging::{LogTarget, filter_directive, open_log_file, parse_filter};
use std::io::Write;
use std::path::Path;

#[test]
fn test_debug_flag_wins_over_everything() {
    assert_eq!(filter_directive(Some("warn"), Some("error"), true), "debug");
}

#[test]
fn test_rust_log_beats_configured_level() {
    assert_eq!(filter_directive(Some("hostwatch=trace"), Some("warn"), false), "hostwatch=trace");
    assert_eq!(filter_directive(Some("  "), Some("warn"), false), "warn");
    assert_eq!(filter_directive(None, None, false), "info");
}

#[test]
fn test_dashboard_never_logs_to_the_terminal() {
    assert_eq!(LogTarget::choose(None, false), LogTarget::Silent);
    assert_eq!(LogTarget::choose(None, true), LogTarget::Stderr);
    assert_eq!(
        LogTarget::choose(Some(Path::new("/tmp/hw.log")), false),
        LogTarget::File("/tmp/hw.log".into())
    );
}

#[test]
fn test_log_file_is_appended_to() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hostwatch.log");

    writeln!(open_log_file(&path).unwrap(), "first").unwrap();
    writeln!(open_log_file(&path).unwrap(), "second").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "first\nsecond\n");
}

#[test]
fn test_unopenable_log_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("hostwatch.log");

    let err = open_log_file(&path).unwrap_err();
    assert!(err.to_string().contains("hostwatch.log"));
}

#[test]
fn test_unparsable_filter_falls_back_to_info() {
    assert_eq!(parse_filter("hostwatch=loud").to_string(), "info");
}
