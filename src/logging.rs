// tracing subscriber setup
//
// The dashboard owns the terminal, so log lines must never reach stdout or stderr while it is
// running: they go to a file, or nowhere.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Silent,
}

impl LogTarget {
    /// A log file always wins; otherwise stderr is only safe when no dashboard is drawn.
    pub fn choose(log_file: Option<&Path>, headless: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if headless => Self::Stderr,
            None => Self::Silent,
        }
    }
}

/// Filter directive: `--debug` forces debug, then `RUST_LOG`, then the configured level, then info.
pub fn filter_directive(rust_log: Option<&str>, level: Option<&str>, debug: bool) -> String {
    if debug {
        return "debug".to_string();
    }
    rust_log
        .filter(|s| !s.trim().is_empty())
        .or(level)
        .unwrap_or("info")
        .to_string()
}

pub fn open_log_file(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("opening log file {}: {}", path.display(), e))
}

/// Builds the filter for `directive`. An unparsable one (only possible through `RUST_LOG`;
/// config levels are validated on load) falls back to `info` with a warning on stderr, which
/// is still the plain terminal at this point.
pub fn parse_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!(
            "{}: invalid log filter '{}' ({}); using info",
            crate::version::NAME,
            directive,
            e
        );
        EnvFilter::new("info")
    })
}

/// Installs the global subscriber. Fails only if the log file cannot be opened.
pub fn init(target: &LogTarget, level: Option<&str>, debug: bool) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), level, debug);
    let filter = parse_filter(&directive);

    match target {
        LogTarget::Silent => Ok(()),
        LogTarget::Stderr => {
            // try_init: a second init (e.g. from tests) keeps the first subscriber.
            let _ = tracing_subscriber::fmt()
                .with_timer(LocalTimer)
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
            Ok(())
        }
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            let _ = tracing_subscriber::fmt()
                .with_timer(LocalTimer)
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            Ok(())
        }
    }
}
