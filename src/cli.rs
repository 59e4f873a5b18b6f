// Command-line surface and duration parsing for interval flags

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::AppConfig;

/// Real-time CPU, memory, disk and network dashboard.
#[derive(Debug, Parser)]
#[command(name = "hostwatch", version, about = "Local resource telemetry dashboard")]
pub struct Args {
    /// Time between sampling rounds, e.g. 500ms, 2s, 1m, 250us (default: 1s).
    #[arg(short, long, value_name = "DURATION", value_parser = parse_duration)]
    pub interval: Option<Duration>,

    /// Report a sample as a temporary error if it takes longer than this.
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub sample_timeout: Option<Duration>,

    /// Path to a TOML config file. Falls back to $CONFIG_FILE, then ./hostwatch.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file. Without it the dashboard logs nothing.
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    pub debug: bool,

    /// Do not capture mouse events.
    #[arg(long)]
    pub no_mouse: bool,

    /// Draw in the main screen buffer instead of the alternate screen.
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Take two samples one interval apart, print a JSON report and exit.
    #[arg(long)]
    pub once: bool,
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub interval: Duration,
    pub sample_timeout: Option<Duration>,
    pub stats_log_interval_secs: u64,
    pub cpu_history_len: usize,
    pub mouse: bool,
    pub alt_screen: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub debug: bool,
    pub once: bool,
}

impl Args {
    pub fn resolve(&self, config: &AppConfig) -> Settings {
        Settings {
            interval: self.interval.unwrap_or_else(|| config.monitoring.interval()),
            sample_timeout: self
                .sample_timeout
                .or_else(|| config.monitoring.sample_timeout()),
            stats_log_interval_secs: config.monitoring.stats_log_interval_secs,
            cpu_history_len: config.monitoring.cpu_history_len,
            mouse: config.display.mouse && !self.no_mouse,
            alt_screen: config.display.alt_screen && !self.no_alt_screen,
            log_file: self.log.clone().or_else(|| config.logging.file.clone()),
            log_level: config.logging.level.clone(),
            debug: self.debug,
            once: self.once,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid duration '{input}': {message}")]
pub struct DurationParseError {
    pub input: String,
    pub message: String,
}

/// Parses `<number>[unit]` where unit is one of ns, us, µs, ms, s, m, h. A bare number is
/// seconds. Fractions are allowed (`1.5s`); zero and negative durations are not.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let trimmed = input.trim();
    let err = |message: &str| DurationParseError {
        input: input.to_string(),
        message: message.to_string(),
    };

    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    if number.is_empty() {
        return Err(err("expected a number, e.g. 500ms or 2s"));
    }
    let value: f64 = number.parse().map_err(|_| err("malformed number"))?;

    let nanos_per_unit: f64 = match unit.trim() {
        "ns" => 1.0,
        "us" | "µs" => 1e3,
        "ms" => 1e6,
        "" | "s" => 1e9,
        "m" => 60e9,
        "h" => 3600e9,
        _ => return Err(err("unknown unit; use ns, us, ms, s, m or h")),
    };

    let nanos = (value * nanos_per_unit).round();
    if !nanos.is_finite() || nanos >= u64::MAX as f64 {
        return Err(err("duration too large"));
    }
    if nanos < 1.0 {
        return Err(err("duration must be greater than zero"));
    }
    Ok(Duration::from_nanos(nanos as u64))
}
