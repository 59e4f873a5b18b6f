// Sampling scheduler: one round per interval, one task per resource per round.
// Rounds never wait for the previous round's samples; every task reports exactly one event
// back through the shared channel, in whatever order they finish.

use crate::collector::MetricsSource;
use crate::error::{CollectError, ErrorKind};
use crate::models::{ResourceKind, Snapshot};
use crate::state::Event;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Duration, interval};
use tracing::Instrument;

/// Counters shared between the scheduler loop and its sample tasks.
#[derive(Debug, Default)]
pub struct SchedulerStats {
    pub rounds_started: AtomicU64,
    pub samples_ok: AtomicU64,
    pub samples_failed: AtomicU64,
    pub samples_timed_out: AtomicU64,
}

impl SchedulerStats {
    pub fn rounds(&self) -> u64 {
        self.rounds_started.load(Ordering::Relaxed)
    }

    pub fn ok(&self) -> u64 {
        self.samples_ok.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.samples_failed.load(Ordering::Relaxed)
    }

    pub fn timed_out(&self) -> u64 {
        self.samples_timed_out.load(Ordering::Relaxed)
    }
}

/// How long process exit waits for sampling calls still running on the blocking pool.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

/// Multi-threaded runtime the dashboard and its samplers run on.
pub fn build_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}

/// Tears the runtime down without joining abandoned samples. A plain drop would block until
/// every `spawn_blocking` call returned, so one hung OS call could keep the process alive.
pub fn shutdown_runtime(runtime: Runtime) {
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
}

/// Source, channels, and shutdown for the scheduler.
pub struct SchedulerDeps {
    pub source: Arc<dyn MetricsSource>,
    pub events: mpsc::UnboundedSender<Event>,
    /// Each message starts an extra round immediately.
    pub refresh_rx: mpsc::Receiver<()>,
    pub shutdown_rx: oneshot::Receiver<()>,
    pub stats: Arc<SchedulerStats>,
}

/// Scheduler timing.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Must be non-zero; there is no lower bound beyond that.
    pub interval: Duration,
    /// Samples running longer are reported as temporary errors. `None` waits indefinitely.
    pub sample_timeout: Option<Duration>,
    /// How often to log the counters (real seconds).
    pub stats_log_interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            sample_timeout: None,
            stats_log_interval_secs: 60,
        }
    }
}

/// Samples one resource on the blocking pool.
pub async fn sample_once(
    source: Arc<dyn MetricsSource>,
    kind: ResourceKind,
    timeout: Option<Duration>,
) -> Result<Snapshot, CollectError> {
    sample_timed(source, kind, timeout).await.0
}

/// Like `sample_once`, also reporting whether the timeout fired.
async fn sample_timed(
    source: Arc<dyn MetricsSource>,
    kind: ResourceKind,
    timeout: Option<Duration>,
) -> (Result<Snapshot, CollectError>, bool) {
    let handle = tokio::task::spawn_blocking(move || source.sample(kind));
    let joined = match timeout {
        Some(limit) => match tokio::time::timeout(limit, handle).await {
            Ok(joined) => joined,
            // The blocking call keeps running; its result is dropped when it finishes.
            Err(_) => {
                let err = CollectError::new(
                    ErrorKind::Temporary,
                    kind,
                    format!("sample timed out after {limit:?}"),
                );
                return (Err(err), true);
            }
        },
        None => handle.await,
    };
    let result = joined
        .map_err(|e| CollectError::wrap(kind, "sampling task failed", &e, ErrorKind::Access))
        .and_then(|r| r);
    (result, false)
}

/// Emits a `Tick` and spawns one sampling task per resource. Returns without waiting for them.
/// Returns false when the event receiver is gone.
pub fn launch_round(
    source: &Arc<dyn MetricsSource>,
    events: &mpsc::UnboundedSender<Event>,
    timeout: Option<Duration>,
    stats: &Arc<SchedulerStats>,
) -> bool {
    if events.send(Event::Tick { at: Utc::now() }).is_err() {
        return false;
    }
    stats.rounds_started.fetch_add(1, Ordering::Relaxed);

    for kind in ResourceKind::ALL {
        let source = source.clone();
        let events = events.clone();
        let stats = stats.clone();
        tokio::spawn(async move {
            let (result, timed_out) = sample_timed(source, kind, timeout).await;
            let event = match result {
                Ok(snapshot) => {
                    stats.samples_ok.fetch_add(1, Ordering::Relaxed);
                    Event::SampleSucceeded(snapshot)
                }
                Err(e) => {
                    stats.samples_failed.fetch_add(1, Ordering::Relaxed);
                    if timed_out {
                        stats.samples_timed_out.fetch_add(1, Ordering::Relaxed);
                    }
                    tracing::warn!(
                        resource = %kind,
                        kind = %e.kind,
                        recoverable = e.is_recoverable(),
                        error = %e.message,
                        operation = "sample",
                        "sample failed"
                    );
                    Event::SampleFailed(kind, e)
                }
            };
            // The receiver is gone only during shutdown; abandoned results are fine.
            let _ = events.send(event);
        });
    }
    true
}

pub fn spawn(deps: SchedulerDeps, config: SchedulerConfig) -> tokio::task::JoinHandle<()> {
    let SchedulerDeps {
        source,
        events,
        mut refresh_rx,
        mut shutdown_rx,
        stats,
    } = deps;
    let SchedulerConfig {
        interval: period,
        sample_timeout,
        stats_log_interval_secs,
    } = config;

    let stats_log_interval = Duration::from_secs(stats_log_interval_secs);
    let interval_us = period.as_micros() as u64;
    let scheduler_span = tracing::span!(tracing::Level::DEBUG, "scheduler", interval_us);

    let task = async move {
        let mut tick = interval(period);
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(stats_log_interval);
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick of an interval completes immediately; skip it for the stats log.
        stats_log_tick.tick().await;

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    tracing::debug!("Scheduler shutting down");
                    break;
                }
                _ = tick.tick() => {
                    if !launch_round(&source, &events, sample_timeout, &stats) {
                        tracing::debug!("Event receiver closed; stopping scheduler");
                        break;
                    }
                }
                Some(()) = refresh_rx.recv() => {
                    tracing::debug!(operation = "manual_refresh", "Manual refresh requested");
                    if !launch_round(&source, &events, sample_timeout, &stats) {
                        tracing::debug!("Event receiver closed; stopping scheduler");
                        break;
                    }
                }
                _ = stats_log_tick.tick() => {
                    tracing::info!(
                        rounds_started = stats.rounds(),
                        samples_ok = stats.ok(),
                        samples_failed = stats.failed(),
                        samples_timed_out = stats.timed_out(),
                        "app stats"
                    );
                }
            }
        }
    };
    tokio::spawn(task.instrument(scheduler_span))
}
