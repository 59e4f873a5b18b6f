// Per-resource health tracking

use chrono::{DateTime, Utc};

use crate::error::CollectError;

/// Outcome bookkeeping for one resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentStatus {
    pub ok: bool,
    pub last_error: Option<CollectError>,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_attempt_at: Option<DateTime<Utc>>,
    /// Failures since the last success; display only, there is no backoff.
    pub consecutive_failures: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    NotSampled,
    Healthy,
    Degraded,
}

impl ComponentStatus {
    pub fn health(&self) -> Health {
        match (self.ok, self.last_attempt_at) {
            (_, None) => Health::NotSampled,
            (true, Some(_)) => Health::Healthy,
            (false, Some(_)) => Health::Degraded,
        }
    }

    pub fn record_success(self, at: DateTime<Utc>) -> Self {
        Self {
            ok: true,
            last_error: None,
            last_success_at: Some(at),
            last_attempt_at: Some(at),
            consecutive_failures: 0,
        }
    }

    /// The new error replaces whatever was there.
    pub fn record_failure(self, error: CollectError) -> Self {
        Self {
            ok: false,
            last_attempt_at: Some(error.occurred_at),
            last_error: Some(error),
            last_success_at: self.last_success_at,
            consecutive_failures: self.consecutive_failures.saturating_add(1),
        }
    }
}

/// Latest snapshot of one resource plus its status.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    /// Last good reading. Kept while degraded, but not meant to be shown as current.
    pub snapshot: Option<T>,
    pub status: ComponentStatus,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            snapshot: None,
            status: ComponentStatus::default(),
        }
    }
}

impl<T> ResourceState<T> {
    pub fn succeeded(self, snapshot: T, at: DateTime<Utc>) -> Self {
        Self {
            snapshot: Some(snapshot),
            status: self.status.record_success(at),
        }
    }

    pub fn failed(self, error: CollectError) -> Self {
        Self {
            snapshot: self.snapshot,
            status: self.status.record_failure(error),
        }
    }

    /// The snapshot to display: `None` while the last sample failed or before the first one.
    pub fn current(&self) -> Option<&T> {
        if self.status.ok {
            self.snapshot.as_ref()
        } else {
            None
        }
    }

    pub fn error(&self) -> Option<&CollectError> {
        self.status.last_error.as_ref()
    }

    pub fn health(&self) -> Health {
        self.status.health()
    }
}
