// Command-line parsing and layering over the config file

use clap::Parser;
use hostwatch::cli::{Args, parse_duration};
use hostwatch::config::AppConfig;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_durations_accept_every_unit() {
    assert_eq!(parse_duration("250ns").unwrap(), Duration::from_nanos(250));
    assert_eq!(parse_duration("250us").unwrap(), Duration::from_micros(250));
    assert_eq!(parse_duration("250µs").unwrap(), Duration::from_micros(250));
    assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
    assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
    assert_eq!(parse_duration("1m").unwrap(), Duration::from_secs(60));
    assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
}

#[test]
fn test_bare_numbers_are_seconds_and_fractions_work() {
    assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
    assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
    assert_eq!(parse_duration(" 0.25ms ").unwrap(), Duration::from_micros(250));
}

#[test]
fn test_durations_reject_zero_negative_and_garbage() {
    for input in ["0", "0ms", "0.0000000001s", "-1s", "", "ms", "fast", "1.2.3s", "10parsecs"] {
        let err = parse_duration(input).unwrap_err();
        assert_eq!(err.input, input, "input {input:?}");
    }
}

#[test]
fn test_duration_error_names_the_input() {
    let err = parse_duration("5 fortnights").unwrap_err();
    assert!(err.to_string().contains("5 fortnights"));
}

#[test]
fn test_defaults_come_from_config() {
    let args = Args::try_parse_from(["hostwatch"]).unwrap();
    let settings = args.resolve(&AppConfig::default());

    assert_eq!(settings.interval, Duration::from_secs(1));
    assert_eq!(settings.sample_timeout, None);
    assert!(settings.mouse);
    assert!(settings.alt_screen);
    assert!(!settings.once);
    assert!(settings.log_file.is_none());
}

#[test]
fn test_flags_override_config() {
    let config = AppConfig::load_from_str(
        "[monitoring]\ninterval_ms = 5000\nsample_timeout_ms = 100\n[logging]\nfile = \"a.log\"\n",
    )
    .unwrap();
    let args = Args::try_parse_from([
        "hostwatch",
        "-i",
        "250us",
        "--sample-timeout",
        "2s",
        "--log",
        "b.log",
        "--no-mouse",
        "--no-alt-screen",
        "--debug",
        "--once",
    ])
    .unwrap();

    let settings = args.resolve(&config);

    assert_eq!(settings.interval, Duration::from_micros(250));
    assert_eq!(settings.sample_timeout, Some(Duration::from_secs(2)));
    assert_eq!(settings.log_file.as_deref(), Some(Path::new("b.log")));
    assert!(!settings.mouse);
    assert!(!settings.alt_screen);
    assert!(settings.debug);
    assert!(settings.once);
}

#[test]
fn test_config_values_apply_when_flags_are_absent() {
    let config = AppConfig::load_from_str(
        "[monitoring]\ninterval_ms = 5000\nsample_timeout_ms = 100\n[display]\nmouse = false\n",
    )
    .unwrap();
    let settings = Args::try_parse_from(["hostwatch"]).unwrap().resolve(&config);

    assert_eq!(settings.interval, Duration::from_secs(5));
    assert_eq!(settings.sample_timeout, Some(Duration::from_millis(100)));
    assert!(!settings.mouse);
}

#[test]
fn test_invalid_interval_flag_is_rejected() {
    assert!(Args::try_parse_from(["hostwatch", "--interval", "0s"]).is_err());
    assert!(Args::try_parse_from(["hostwatch", "--interval", "soon"]).is_err());
}

#[test]
fn test_version_flag_is_available() {
    let err = Args::try_parse_from(["hostwatch", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
