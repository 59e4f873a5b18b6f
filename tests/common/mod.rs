// Shared test helpers
#![allow(dead_code)]

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use hostwatch::collector::MetricsSource;
use hostwatch::error::{CollectError, ErrorKind};
use hostwatch::models::*;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Fixed base time plus `secs` seconds.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap() + ChronoDuration::seconds(secs)
}

pub fn at_millis(millis: i64) -> DateTime<Utc> {
    at(0) + ChronoDuration::milliseconds(millis)
}

pub fn cpu_snapshot(captured_at: DateTime<Utc>, per_core: &[f64]) -> CpuSnapshot {
    let total = if per_core.is_empty() {
        0.0
    } else {
        per_core.iter().sum::<f64>() / per_core.len() as f64
    };
    CpuSnapshot::new(captured_at, "Test CPU", per_core.to_vec(), total)
}

pub fn memory_snapshot(captured_at: DateTime<Utc>, total: u64, available: u64) -> MemorySnapshot {
    MemorySnapshot::new(
        captured_at,
        total,
        total - available,
        available,
        SwapUsage::default(),
    )
}

/// `(mount point, total, available)` per filesystem.
pub fn disk_snapshot(captured_at: DateTime<Utc>, mounts: &[(&str, u64, u64)]) -> DiskSetSnapshot {
    DiskSetSnapshot {
        captured_at,
        entries: mounts
            .iter()
            .map(|(mount, total, available)| {
                let device = format!("/dev/{}", mount.trim_start_matches('/'));
                DiskEntry::from_space(device, *mount, "ext4", *total, *available)
            })
            .collect(),
    }
}

/// `(name, bytes sent, bytes received)` per interface.
pub fn network_snapshot(
    captured_at: DateTime<Utc>,
    ifaces: &[(&str, u64, u64)],
) -> NetworkSetSnapshot {
    NetworkSetSnapshot {
        captured_at,
        interfaces: ifaces
            .iter()
            .map(|(name, sent, recv)| NetworkInterfaceEntry {
                name: name.to_string(),
                bytes_sent: *sent,
                bytes_recv: *recv,
                packets_sent: sent / 1000,
                packets_recv: recv / 1000,
            })
            .collect(),
    }
}

pub fn collect_error(
    kind: ErrorKind,
    resource: ResourceKind,
    message: &str,
    at: DateTime<Utc>,
) -> CollectError {
    CollectError::at(kind, resource, message, at)
}

/// How the fake collector answers for one resource.
#[derive(Debug, Clone)]
pub enum Behavior {
    Succeed,
    Fail(ErrorKind),
    /// Blocks the sampling thread for this long, then succeeds.
    Slow(Duration),
    Panic,
}

/// Scriptable `MetricsSource`; resources without a script succeed.
#[derive(Default)]
pub struct FakeCollector {
    behaviors: Mutex<HashMap<ResourceKind, Behavior>>,
    calls: [AtomicU64; 4],
    /// Grows on every network sample so consecutive samples produce rates.
    network_counter: AtomicU64,
}

impl FakeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, kind: ResourceKind, behavior: Behavior) -> Self {
        self.set(kind, behavior);
        self
    }

    pub fn set(&self, kind: ResourceKind, behavior: Behavior) {
        self.behaviors.lock().unwrap().insert(kind, behavior);
    }

    pub fn calls(&self, kind: ResourceKind) -> u64 {
        self.calls[index(kind)].load(Ordering::SeqCst)
    }

    fn run(&self, kind: ResourceKind) -> Result<(), CollectError> {
        self.calls[index(kind)].fetch_add(1, Ordering::SeqCst);
        let behavior = self
            .behaviors
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or(Behavior::Succeed);
        match behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail(error_kind) => Err(CollectError::new(
                error_kind,
                kind,
                format!("{kind} scripted failure"),
            )),
            Behavior::Slow(delay) => {
                std::thread::sleep(delay);
                Ok(())
            }
            Behavior::Panic => panic!("{kind} scripted panic"),
        }
    }
}

fn index(kind: ResourceKind) -> usize {
    match kind {
        ResourceKind::Cpu => 0,
        ResourceKind::Memory => 1,
        ResourceKind::Disk => 2,
        ResourceKind::Network => 3,
    }
}

impl MetricsSource for FakeCollector {
    fn sample_cpu(&self) -> Result<CpuSnapshot, CollectError> {
        self.run(ResourceKind::Cpu)?;
        Ok(cpu_snapshot(Utc::now(), &[10.0, 20.0, 30.0, 40.0]))
    }

    fn sample_memory(&self) -> Result<MemorySnapshot, CollectError> {
        self.run(ResourceKind::Memory)?;
        Ok(memory_snapshot(Utc::now(), 16 << 30, 8 << 30))
    }

    fn sample_disk(&self) -> Result<DiskSetSnapshot, CollectError> {
        self.run(ResourceKind::Disk)?;
        Ok(disk_snapshot(Utc::now(), &[("/", 100 << 30, 40 << 30)]))
    }

    fn sample_network(&self) -> Result<NetworkSetSnapshot, CollectError> {
        self.run(ResourceKind::Network)?;
        let n = self.network_counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(network_snapshot(Utc::now(), &[("eth0", n * 1024, n * 2048)]))
    }
}
