use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Looked up in the working directory when neither `--config` nor `CONFIG_FILE` is given.
pub const DEFAULT_CONFIG_FILE: &str = "hostwatch.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub monitoring: MonitoringConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Time between sampling rounds. Sub-millisecond intervals are only reachable via `--interval`.
    pub interval_ms: u64,
    /// Per-sample timeout; 0 disables it.
    pub sample_timeout_ms: u64,
    /// How often to log scheduler counters at INFO level.
    pub stats_log_interval_secs: u64,
    /// CPU samples kept for the usage sparkline.
    pub cpu_history_len: usize,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            sample_timeout_ms: 0,
            stats_log_interval_secs: 60,
            cpu_history_len: crate::state::DEFAULT_CPU_HISTORY,
        }
    }
}

impl MonitoringConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn sample_timeout(&self) -> Option<Duration> {
        (self.sample_timeout_ms > 0).then(|| Duration::from_millis(self.sample_timeout_ms))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mouse: bool,
    pub alt_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            alt_screen: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; without one the dashboard logs nothing.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: Option<String>,
}

impl AppConfig {
    /// Loads from `path`, else `CONFIG_FILE`, else `hostwatch.toml` if it exists, else defaults.
    /// An explicitly named file that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("CONFIG_FILE").map(PathBuf::from));
        let path = match explicit {
            Some(p) => p,
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.monitoring.interval_ms > 0,
            "monitoring.interval_ms must be > 0, got {}",
            self.monitoring.interval_ms
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        anyhow::ensure!(
            self.monitoring.cpu_history_len > 0,
            "monitoring.cpu_history_len must be > 0, got {}",
            self.monitoring.cpu_history_len
        );
        if let Some(level) = &self.logging.level {
            anyhow::ensure!(!level.trim().is_empty(), "logging.level must be non-empty");
            tracing_subscriber::EnvFilter::try_new(level).map_err(|e| {
                anyhow::anyhow!("logging.level '{}' is not a valid filter: {}", level, e)
            })?;
        }
        Ok(())
    }
}
