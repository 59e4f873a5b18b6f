// Model invariants, usage classification and JSON field naming

mod common;

use common::{at, disk_snapshot, network_snapshot};
use hostwatch::models::*;

#[test]
fn test_cpu_snapshot_core_count_matches_and_values_clamp() {
    let cpu = CpuSnapshot::new(at(0), "x86", vec![-5.0, 50.0, 150.0, f64::NAN], 120.0);
    assert_eq!(cpu.core_count, 4);
    assert_eq!(cpu.per_core_percent, vec![0.0, 50.0, 100.0, 0.0]);
    assert_eq!(cpu.total_percent, 100.0);
    assert_eq!(cpu.mean_core_percent(), 37.5);
}

#[test]
fn test_memory_snapshot_caps_used_at_total() {
    let swap = SwapUsage {
        total: 100,
        used: 500,
        free: 0,
    };
    let mem = MemorySnapshot::new(at(0), 1000, 5000, 2000, swap);
    assert_eq!(mem.used, 1000);
    assert_eq!(mem.available, 1000);
    assert_eq!(mem.swap.used, 100);
    assert_eq!(mem.usage_percent(), 100.0);
    assert_eq!(mem.swap_usage_percent(), 100.0);
}

#[test]
fn test_memory_without_swap() {
    let mem = MemorySnapshot::new(at(0), 1000, 250, 750, SwapUsage::default());
    assert!(!mem.has_swap());
    assert_eq!(mem.swap_usage_percent(), 0.0);
    assert_eq!(mem.usage_percent(), 25.0);
}

#[test]
fn test_disk_classification_50_85_95() {
    let disks = disk_snapshot(
        at(0),
        &[("/", 100, 50), ("/home", 100, 15), ("/var", 100, 5)],
    );

    let critical: Vec<&str> = disks.critical().map(|d| d.mount_point.as_str()).collect();
    assert_eq!(critical, vec!["/var"]);
    assert_eq!(disks.warning_or_worse().count(), 2);
    assert!(disks.has_critical());
    assert_eq!(disks.total_space(), 300);
    assert_eq!(disks.used_space(), 230);
}

#[test]
fn test_disk_entry_from_space_derives_used() {
    let entry = DiskEntry::from_space("/dev/sda1", "/", "ext4", 200, 50);
    assert_eq!(entry.used, 150);
    assert_eq!(entry.used_percent, 75.0);

    let empty = DiskEntry::from_space("/dev/sdb", "/mnt", "ext4", 0, 0);
    assert_eq!(empty.used_percent, 0.0);
}

#[test]
fn test_usage_level_thresholds() {
    assert_eq!(usage_level(69.9), UsageLevel::Normal);
    assert_eq!(usage_level(70.0), UsageLevel::Warning);
    assert_eq!(usage_level(89.9), UsageLevel::Warning);
    assert_eq!(usage_level(90.0), UsageLevel::Critical);
}

#[test]
fn test_activity_levels() {
    let mib = 1024.0 * 1024.0;
    let rate = |total: f64| RateSample {
        send_bytes_per_sec: total,
        recv_bytes_per_sec: 0.0,
    };
    assert_eq!(rate(0.0).activity(), ActivityLevel::Idle);
    assert_eq!(rate(1.0).activity(), ActivityLevel::Low);
    assert_eq!(rate(mib).activity(), ActivityLevel::Medium);
    assert_eq!(rate(10.0 * mib).activity(), ActivityLevel::High);
}

#[test]
fn test_snapshot_kind_and_time() {
    let snapshot = Snapshot::Network(network_snapshot(at(7), &[("eth0", 1, 2)]));
    assert_eq!(snapshot.kind(), ResourceKind::Network);
    assert_eq!(snapshot.captured_at(), at(7));
}

#[test]
fn test_memory_serialization_camel_case() {
    let mem = MemorySnapshot::new(at(0), 1000, 250, 750, SwapUsage::default());
    let json = serde_json::to_string(&mem).unwrap();
    assert!(json.contains("\"capturedAt\""));
    let back: MemorySnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mem);
}

#[test]
fn test_disk_and_network_serialization_camel_case() {
    let disks = disk_snapshot(at(0), &[("/", 100, 50)]);
    let json = serde_json::to_string(&disks).unwrap();
    assert!(json.contains("\"mountPoint\""));
    assert!(json.contains("\"usedPercent\""));
    assert!(json.contains("\"fileSystem\""));

    let net = network_snapshot(at(0), &[("eth0", 1, 2)]);
    let json = serde_json::to_string(&net).unwrap();
    assert!(json.contains("\"bytesSent\""));
    assert!(json.contains("\"packetsRecv\""));
}

#[test]
fn test_snapshot_enum_is_tagged_by_kind() {
    let cpu = CpuSnapshot::new(at(0), "arm", vec![1.0], 1.0);
    let json = serde_json::to_value(Snapshot::Cpu(cpu)).unwrap();
    assert_eq!(json["kind"], "cpu");
    assert_eq!(json["data"]["coreCount"], 1);
    assert!(json["data"]["perCorePercent"].is_array());
}

#[test]
fn test_percent_of_handles_zero_whole() {
    assert_eq!(percent_of(5, 0), 0.0);
    assert_eq!(percent_of(1, 4), 25.0);
    assert_eq!(percent_of(8, 4), 100.0);
}
