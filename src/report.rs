// One-shot JSON report (`--once`)
//
// Runs two sampling rounds one interval apart through the same reducer the dashboard uses, so
// the report carries network rates and per-resource errors exactly as the panels would.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use serde::Serialize;

use crate::collector::MetricsSource;
use crate::error::CollectError;
use crate::models::{
    CpuSnapshot, DiskSetSnapshot, MemorySnapshot, NetworkSetSnapshot, RateSample, ResourceKind,
};
use crate::scheduler::sample_once;
use crate::state::{AggregateState, Event, reduce};
use crate::version;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub rounds: u64,
    pub cpu: Option<CpuSnapshot>,
    pub memory: Option<MemorySnapshot>,
    pub disk: Option<DiskSetSnapshot>,
    pub network: Option<NetworkSetSnapshot>,
    pub rates: BTreeMap<String, RateSample>,
    /// Latest error of every resource whose last sample failed.
    pub errors: Vec<CollectError>,
}

impl Report {
    pub fn from_state(state: &AggregateState, generated_at: DateTime<Utc>) -> Self {
        let errors = ResourceKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let status = state.status(kind);
                if status.ok {
                    None
                } else {
                    status.last_error.clone()
                }
            })
            .collect();
        Self {
            generated_at,
            version: version::VERSION.to_string(),
            rounds: state.rounds,
            cpu: state.cpu.current().cloned(),
            memory: state.memory.current().cloned(),
            disk: state.disk.current().cloned(),
            network: state.network.current().cloned(),
            rates: state.rates.clone(),
            errors,
        }
    }
}

/// Runs one sampling round to completion and folds every result into `state`.
pub async fn run_round(
    state: AggregateState,
    source: &Arc<dyn MetricsSource>,
    timeout: Option<Duration>,
) -> AggregateState {
    let state = reduce(state, Event::Tick { at: Utc::now() }).0;
    let samples = ResourceKind::ALL
        .into_iter()
        .map(|kind| async move { (kind, sample_once(source.clone(), kind, timeout).await) });
    join_all(samples)
        .await
        .into_iter()
        .fold(state, |state, (kind, result)| {
            let event = match result {
                Ok(snapshot) => Event::SampleSucceeded(snapshot),
                Err(e) => {
                    tracing::warn!(
                        resource = %kind,
                        error = %e,
                        operation = "report",
                        "sample failed"
                    );
                    Event::SampleFailed(kind, e)
                }
            };
            reduce(state, event).0
        })
}

pub async fn collect(
    source: Arc<dyn MetricsSource>,
    interval: Duration,
    timeout: Option<Duration>,
) -> Report {
    let state = run_round(AggregateState::default(), &source, timeout).await;
    tokio::time::sleep(interval).await;
    let state = run_round(state, &source, timeout).await;
    Report::from_state(&state, Utc::now())
}
