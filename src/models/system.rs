// CPU and memory snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::percent_of;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSnapshot {
    pub captured_at: DateTime<Utc>,
    pub model: String,
    pub core_count: usize,
    pub per_core_percent: Vec<f64>,
    pub total_percent: f64,
}

impl CpuSnapshot {
    /// Builds a snapshot whose core count always matches the per-core list.
    /// Percentages outside [0, 100] (or NaN) are clamped.
    pub fn new(
        captured_at: DateTime<Utc>,
        model: impl Into<String>,
        per_core_percent: Vec<f64>,
        total_percent: f64,
    ) -> Self {
        let per_core_percent: Vec<f64> = per_core_percent.into_iter().map(clamp_percent).collect();
        Self {
            captured_at,
            model: model.into(),
            core_count: per_core_percent.len(),
            per_core_percent,
            total_percent: clamp_percent(total_percent),
        }
    }

    /// Average of the per-core figures; used when the OS does not report a global value.
    pub fn mean_core_percent(&self) -> f64 {
        if self.per_core_percent.is_empty() {
            return 0.0;
        }
        self.per_core_percent.iter().sum::<f64>() / self.per_core_percent.len() as f64
    }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    pub captured_at: DateTime<Utc>,
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub swap: SwapUsage,
}

impl MemorySnapshot {
    /// `used` figures larger than their totals are capped at the total.
    pub fn new(
        captured_at: DateTime<Utc>,
        total: u64,
        used: u64,
        available: u64,
        swap: SwapUsage,
    ) -> Self {
        Self {
            captured_at,
            total,
            used: used.min(total),
            available: available.min(total),
            swap: SwapUsage {
                total: swap.total,
                used: swap.used.min(swap.total),
                free: swap.free.min(swap.total),
            },
        }
    }

    pub fn usage_percent(&self) -> f64 {
        percent_of(self.used, self.total)
    }

    pub fn has_swap(&self) -> bool {
        self.swap.total > 0
    }

    pub fn swap_usage_percent(&self) -> f64 {
        percent_of(self.swap.used, self.swap.total)
    }
}
