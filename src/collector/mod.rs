// Host metric sampling via sysinfo

mod linux;

use crate::error::{CollectError, ErrorKind};
use crate::models::*;
use chrono::Utc;
use std::sync::Mutex;
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

/// Filesystem kinds that do not represent real storage.
const PSEUDO_FILESYSTEMS: &[&str] = &[
    "proc",
    "sysfs",
    "devtmpfs",
    "tmpfs",
    "devpts",
    "cgroup",
    "cgroup2",
    "pstore",
    "bpf",
    "tracefs",
    "securityfs",
    "debugfs",
    "configfs",
    "fusectl",
    "mqueue",
    "hugetlbfs",
    "autofs",
    "squashfs",
];

/// Loopback names across platforms.
const LOOPBACK_NAMES: &[&str] = &["lo", "Loopback", "Loopback Pseudo-Interface 1"];

/// Source of the four independent host readings. Implementations block; the scheduler runs
/// each call on the blocking pool.
pub trait MetricsSource: Send + Sync {
    fn sample_cpu(&self) -> Result<CpuSnapshot, CollectError>;

    fn sample_memory(&self) -> Result<MemorySnapshot, CollectError>;

    /// Mounted real filesystems. Unreadable mounts are skipped as long as one succeeds.
    fn sample_disk(&self) -> Result<DiskSetSnapshot, CollectError>;

    /// Non-loopback interfaces with their cumulative counters.
    fn sample_network(&self) -> Result<NetworkSetSnapshot, CollectError>;

    fn sample(&self, kind: ResourceKind) -> Result<Snapshot, CollectError> {
        match kind {
            ResourceKind::Cpu => self.sample_cpu().map(Snapshot::Cpu),
            ResourceKind::Memory => self.sample_memory().map(Snapshot::Memory),
            ResourceKind::Disk => self.sample_disk().map(Snapshot::Disk),
            ResourceKind::Network => self.sample_network().map(Snapshot::Network),
        }
    }
}

pub fn is_pseudo_filesystem(file_system: &str) -> bool {
    PSEUDO_FILESYSTEMS.contains(&file_system)
}

pub fn is_loopback(name: &str) -> bool {
    LOOPBACK_NAMES.contains(&name) || linux::is_loopback_device(name)
}

struct CpuSampler {
    sys: System,
    primed: bool,
}

/// `MetricsSource` backed by sysinfo. Each resource has its own handle and lock so a slow
/// disk refresh never holds up CPU or network sampling.
pub struct SysinfoCollector {
    cpu: Mutex<CpuSampler>,
    memory: Mutex<System>,
    disks: Mutex<Disks>,
    networks: Mutex<Networks>,
    cpu_model: String,
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoCollector {
    pub fn new() -> Self {
        let mut cpu_sys = System::new();
        cpu_sys.refresh_cpu_all();
        let cpu_model = linux::read_cpu_model()
            .or_else(|| {
                cpu_sys
                    .cpus()
                    .first()
                    .map(|c| c.brand().trim().to_string())
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or_else(|| "Unknown".into());
        Self {
            cpu: Mutex::new(CpuSampler {
                sys: cpu_sys,
                primed: false,
            }),
            memory: Mutex::new(System::new()),
            disks: Mutex::new(Disks::new_with_refreshed_list()),
            networks: Mutex::new(Networks::new_with_refreshed_list()),
            cpu_model,
        }
    }
}

fn poisoned(resource: ResourceKind, what: &str) -> CollectError {
    CollectError::new(
        ErrorKind::Access,
        resource,
        format!("{what} lock poisoned by an earlier panic"),
    )
}

impl MetricsSource for SysinfoCollector {
    #[instrument(skip(self), fields(collector = "sysinfo", operation = "sample_cpu"))]
    fn sample_cpu(&self) -> Result<CpuSnapshot, CollectError> {
        let mut guard = self
            .cpu
            .lock()
            .map_err(|_| poisoned(ResourceKind::Cpu, "cpu"))?;

        // Usage is a delta between two refreshes; the first call has to wait for one interval.
        if !guard.primed {
            guard.sys.refresh_cpu_usage();
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
            guard.primed = true;
        }
        guard.sys.refresh_cpu_usage();

        let per_core: Vec<f64> = guard
            .sys
            .cpus()
            .iter()
            .map(|c| c.cpu_usage() as f64)
            .collect();
        if per_core.is_empty() {
            return Err(CollectError::new(
                ErrorKind::Access,
                ResourceKind::Cpu,
                "No CPU cores reported by the operating system",
            ));
        }
        let total = guard.sys.global_cpu_usage() as f64;
        let snapshot = CpuSnapshot::new(Utc::now(), self.cpu_model.clone(), per_core, total);
        if total.is_nan() {
            let mean = snapshot.mean_core_percent();
            return Ok(CpuSnapshot {
                total_percent: mean,
                ..snapshot
            });
        }
        Ok(snapshot)
    }

    #[instrument(skip(self), fields(collector = "sysinfo", operation = "sample_memory"))]
    fn sample_memory(&self) -> Result<MemorySnapshot, CollectError> {
        let mut sys = self
            .memory
            .lock()
            .map_err(|_| poisoned(ResourceKind::Memory, "memory"))?;
        sys.refresh_memory();

        let total = sys.total_memory();
        if total == 0 {
            return Err(CollectError::new(
                ErrorKind::Access,
                ResourceKind::Memory,
                "Failed to collect virtual memory statistics",
            ));
        }
        let available = sys.available_memory();
        // sysinfo's used_memory excludes reclaimable caches on some platforms; derive it the
        // same way everywhere.
        let used = total.saturating_sub(available);
        let swap = SwapUsage {
            total: sys.total_swap(),
            used: sys.used_swap(),
            free: sys.free_swap(),
        };
        Ok(MemorySnapshot::new(Utc::now(), total, used, available, swap))
    }

    #[instrument(skip(self), fields(collector = "sysinfo", operation = "sample_disk"))]
    fn sample_disk(&self) -> Result<DiskSetSnapshot, CollectError> {
        let mut disks = self
            .disks
            .lock()
            .map_err(|_| poisoned(ResourceKind::Disk, "disks"))?;
        disks.refresh(true);

        let mut entries = Vec::new();
        let mut unreadable = 0usize;
        for d in disks.list() {
            let file_system = d.file_system().to_string_lossy().into_owned();
            if is_pseudo_filesystem(&file_system) {
                continue;
            }
            let total = d.total_space();
            let mount_point = d.mount_point().to_string_lossy().into_owned();
            if total == 0 {
                tracing::debug!(mount = %mount_point, "skipping mount with no readable size");
                unreadable += 1;
                continue;
            }
            entries.push(DiskEntry::from_space(
                d.name().to_string_lossy().into_owned(),
                mount_point,
                file_system,
                total,
                d.available_space(),
            ));
        }

        if entries.is_empty() {
            return Err(if unreadable > 0 {
                CollectError::new(
                    ErrorKind::Collection,
                    ResourceKind::Disk,
                    format!(
                        "Failed to collect disk usage for any filesystem ({unreadable} unreadable)"
                    ),
                )
            } else {
                CollectError::new(
                    ErrorKind::Access,
                    ResourceKind::Disk,
                    "No accessible disk partitions found",
                )
            });
        }
        entries.sort_by(|a, b| a.mount_point.cmp(&b.mount_point));
        Ok(DiskSetSnapshot {
            captured_at: Utc::now(),
            entries,
        })
    }

    #[instrument(skip(self), fields(collector = "sysinfo", operation = "sample_network"))]
    fn sample_network(&self) -> Result<NetworkSetSnapshot, CollectError> {
        let mut networks = self
            .networks
            .lock()
            .map_err(|_| poisoned(ResourceKind::Network, "networks"))?;
        networks.refresh(true);
        let captured_at = Utc::now();

        let mut interfaces: Vec<NetworkInterfaceEntry> = networks
            .list()
            .iter()
            .filter(|(name, _)| !is_loopback(name))
            .map(|(name, data)| NetworkInterfaceEntry {
                name: name.clone(),
                bytes_sent: data.total_transmitted(),
                bytes_recv: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
            })
            .collect();

        if interfaces.is_empty() {
            return Err(CollectError::new(
                ErrorKind::Access,
                ResourceKind::Network,
                "No accessible network interfaces found",
            ));
        }
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(NetworkSetSnapshot {
            captured_at,
            interfaces,
        })
    }
}
