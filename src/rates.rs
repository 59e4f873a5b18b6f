// Network throughput from two consecutive counter snapshots

use std::collections::BTreeMap;

use crate::models::{NetworkSetSnapshot, RateSample};

/// Per-interface send/receive rates between `previous` and `current`.
///
/// Only interfaces present in both snapshots get an entry; a new interface shows up from the
/// round after it first appears. When the elapsed time is not positive nothing is reported.
/// A counter that went backwards (wraparound, interface restart) reports exactly 0 for that
/// direction this round instead of a bogus spike.
pub fn compute_rates(
    previous: Option<&NetworkSetSnapshot>,
    current: &NetworkSetSnapshot,
) -> BTreeMap<String, RateSample> {
    let mut rates = BTreeMap::new();
    let Some(previous) = previous else {
        return rates;
    };

    let dt = match (current.captured_at - previous.captured_at).num_nanoseconds() {
        Some(ns) if ns > 0 => ns as f64 / 1e9,
        _ => return rates,
    };

    for cur in &current.interfaces {
        let Some(prev) = previous.interface(&cur.name) else {
            continue;
        };
        rates.insert(
            cur.name.clone(),
            RateSample {
                send_bytes_per_sec: counter_rate(prev.bytes_sent, cur.bytes_sent, dt),
                recv_bytes_per_sec: counter_rate(prev.bytes_recv, cur.bytes_recv, dt),
            },
        );
    }
    rates
}

fn counter_rate(previous: u64, current: u64, dt_secs: f64) -> f64 {
    match current.checked_sub(previous) {
        Some(delta) => delta as f64 / dt_secs,
        None => 0.0,
    }
}

pub fn total_send_rate(rates: &BTreeMap<String, RateSample>) -> f64 {
    rates.values().map(|r| r.send_bytes_per_sec).sum()
}

pub fn total_recv_rate(rates: &BTreeMap<String, RateSample>) -> f64 {
    rates.values().map(|r| r.recv_bytes_per_sec).sum()
}

/// Interfaces moving at least 1 MiB/s combined.
pub fn high_activity_interfaces(rates: &BTreeMap<String, RateSample>) -> Vec<&str> {
    rates
        .iter()
        .filter(|(_, r)| r.total() >= 1024.0 * 1024.0)
        .map(|(name, _)| name.as_str())
        .collect()
}
