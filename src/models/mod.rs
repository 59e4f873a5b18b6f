// Resource snapshot models

mod network;
mod resource;
mod storage;
mod system;

pub use network::{ActivityLevel, NetworkInterfaceEntry, NetworkSetSnapshot, RateSample};
pub use resource::{
    CRITICAL_PERCENT, ResourceKind, Snapshot, UsageLevel, WARNING_PERCENT, percent_of,
    usage_level,
};
pub use storage::{DiskEntry, DiskSetSnapshot};
pub use system::{CpuSnapshot, MemorySnapshot, SwapUsage};
