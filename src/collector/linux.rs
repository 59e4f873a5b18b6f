// Linux-specific helpers: /proc and /sys lookups sysinfo does not expose.

/// ARPHRD_LOOPBACK from <linux/if_arp.h>.
#[cfg(target_os = "linux")]
const ARPHRD_LOOPBACK: &str = "772";

/// First "model name" from /proc/cpuinfo. Preferred over sysinfo when it reports "cpu0" etc.
pub(super) fn read_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        for line in content.lines() {
            if line.starts_with("model name") {
                let name = line
                    .find(": ")
                    .map(|i| line[i + 2..].trim())
                    .filter(|s| !s.is_empty() && *s != "cpu0")?;
                return Some(name.to_string());
            }
        }
    }
    None
}

/// True when /sys/class/net/<interface>/type says loopback, whatever the interface is called.
pub(super) fn is_loopback_device(interface_name: &str) -> bool {
    #[cfg(target_os = "linux")]
    {
        if interface_name.contains('/') {
            return false;
        }
        let path = format!("/sys/class/net/{}/type", interface_name);
        if let Ok(content) = std::fs::read_to_string(&path) {
            return content.trim() == ARPHRD_LOOPBACK;
        }
    }
    let _ = interface_name;
    false
}
