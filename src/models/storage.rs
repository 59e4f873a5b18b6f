// Filesystem usage snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CRITICAL_PERCENT, WARNING_PERCENT, percent_of};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskEntry {
    pub device: String,
    pub mount_point: String,
    pub file_system: String,
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub used_percent: f64,
}

impl DiskEntry {
    /// Derives `used` and `used_percent` from total and available space.
    pub fn from_space(
        device: impl Into<String>,
        mount_point: impl Into<String>,
        file_system: impl Into<String>,
        total: u64,
        available: u64,
    ) -> Self {
        let available = available.min(total);
        let used = total - available;
        Self {
            device: device.into(),
            mount_point: mount_point.into(),
            file_system: file_system.into(),
            total,
            used,
            available,
            used_percent: percent_of(used, total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSetSnapshot {
    pub captured_at: DateTime<Utc>,
    pub entries: Vec<DiskEntry>,
}

impl DiskSetSnapshot {
    pub fn at_or_above(&self, threshold: f64) -> impl Iterator<Item = &DiskEntry> {
        self.entries
            .iter()
            .filter(move |e| e.used_percent >= threshold)
    }

    /// Filesystems at or above 90% usage.
    pub fn critical(&self) -> impl Iterator<Item = &DiskEntry> {
        self.at_or_above(CRITICAL_PERCENT)
    }

    /// Filesystems at or above 70% usage (includes critical ones).
    pub fn warning_or_worse(&self) -> impl Iterator<Item = &DiskEntry> {
        self.at_or_above(WARNING_PERCENT)
    }

    pub fn has_critical(&self) -> bool {
        self.critical().next().is_some()
    }

    pub fn total_space(&self) -> u64 {
        self.entries.iter().map(|e| e.total).sum()
    }

    pub fn used_space(&self) -> u64 {
        self.entries.iter().map(|e| e.used).sum()
    }

    pub fn overall_usage_percent(&self) -> f64 {
        percent_of(self.used_space(), self.total_space())
    }
}
