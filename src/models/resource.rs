// Resource kinds, the snapshot sum type, and usage thresholds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CpuSnapshot, DiskSetSnapshot, MemorySnapshot, NetworkSetSnapshot};

/// Usage at or above this percentage is shown as a warning.
pub const WARNING_PERCENT: f64 = 70.0;
/// Usage at or above this percentage is shown as critical.
pub const CRITICAL_PERCENT: f64 = 90.0;

/// One of the four sampled resources. Order matches the 2x2 grid, row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Cpu,
    Memory,
    Disk,
    Network,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Cpu,
        ResourceKind::Memory,
        ResourceKind::Disk,
        ResourceKind::Network,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Cpu => "CPU",
            ResourceKind::Memory => "Memory",
            ResourceKind::Disk => "Disk",
            ResourceKind::Network => "Network",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A successful reading of exactly one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Snapshot {
    Cpu(CpuSnapshot),
    Memory(MemorySnapshot),
    Disk(DiskSetSnapshot),
    Network(NetworkSetSnapshot),
}

impl Snapshot {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Snapshot::Cpu(_) => ResourceKind::Cpu,
            Snapshot::Memory(_) => ResourceKind::Memory,
            Snapshot::Disk(_) => ResourceKind::Disk,
            Snapshot::Network(_) => ResourceKind::Network,
        }
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        match self {
            Snapshot::Cpu(s) => s.captured_at,
            Snapshot::Memory(s) => s.captured_at,
            Snapshot::Disk(s) => s.captured_at,
            Snapshot::Network(s) => s.captured_at,
        }
    }
}

/// Colour band for a usage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

pub fn usage_level(percent: f64) -> UsageLevel {
    if percent >= CRITICAL_PERCENT {
        UsageLevel::Critical
    } else if percent >= WARNING_PERCENT {
        UsageLevel::Warning
    } else {
        UsageLevel::Normal
    }
}

/// `part / whole` as a percentage in [0, 100]; 0 when `whole` is 0.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    ((part as f64 / whole as f64) * 100.0).clamp(0.0, 100.0)
}
