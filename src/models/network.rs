// Network interface counters and derived throughput

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MIB: f64 = 1024.0 * 1024.0;

/// Cumulative counters for one interface, as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceEntry {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSetSnapshot {
    pub captured_at: DateTime<Utc>,
    pub interfaces: Vec<NetworkInterfaceEntry>,
}

impl NetworkSetSnapshot {
    pub fn interface(&self, name: &str) -> Option<&NetworkInterfaceEntry> {
        self.interfaces.iter().find(|i| i.name == name)
    }
}

/// Throughput of one interface between two consecutive snapshots, in bytes per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSample {
    pub send_bytes_per_sec: f64,
    pub recv_bytes_per_sec: f64,
}

impl RateSample {
    pub fn total(&self) -> f64 {
        self.send_bytes_per_sec + self.recv_bytes_per_sec
    }

    pub fn activity(&self) -> ActivityLevel {
        let total = self.total();
        if total >= 10.0 * MIB {
            ActivityLevel::High
        } else if total >= MIB {
            ActivityLevel::Medium
        } else if total > 0.0 {
            ActivityLevel::Low
        } else {
            ActivityLevel::Idle
        }
    }
}

/// Combined send+receive activity band used for colouring interface rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActivityLevel {
    Idle,
    Low,
    /// At least 1 MiB/s.
    Medium,
    /// At least 10 MiB/s.
    High,
}
