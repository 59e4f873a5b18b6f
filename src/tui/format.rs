// Human-readable numbers for the panels (binary units)

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;

/// `512B`, `1.5KB`, `1.0GB`, ...
pub fn format_bytes(bytes: u64) -> String {
    let b = bytes as f64;
    if b >= TB {
        format!("{:.1}TB", b / TB)
    } else if b >= GB {
        format!("{:.1}GB", b / GB)
    } else if b >= MB {
        format!("{:.1}MB", b / MB)
    } else if b >= KB {
        format!("{:.1}KB", b / KB)
    } else {
        format!("{bytes}B")
    }
}

/// `0B/s`, `512B/s`, `1.5MB/s`, ...
pub fn format_rate(bytes_per_sec: f64) -> String {
    if bytes_per_sec >= GB {
        format!("{:.1}GB/s", bytes_per_sec / GB)
    } else if bytes_per_sec >= MB {
        format!("{:.1}MB/s", bytes_per_sec / MB)
    } else if bytes_per_sec >= KB {
        format!("{:.1}KB/s", bytes_per_sec / KB)
    } else if bytes_per_sec > 0.0 {
        format!("{bytes_per_sec:.0}B/s")
    } else {
        "0B/s".to_string()
    }
}

pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Text progress bar of exactly `width` cells.
pub fn usage_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64) as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar width left after a label and the percentage column; never below 10.
pub fn bar_width(available: u16, label_width: u16) -> usize {
    available.saturating_sub(label_width).saturating_sub(10).max(10) as usize
}

/// Cuts `s` to `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}
