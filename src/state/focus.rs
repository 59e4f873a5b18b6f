// Focus movement across the 2x2 panel grid
//
//   Cpu  | Memory
//   -----+--------
//   Disk | Network
//
// Horizontal movement cycles through all four panels and wraps; vertical movement switches
// rows and stops at the edges.

use crate::models::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Up,
    Down,
}

pub fn next(focus: ResourceKind) -> ResourceKind {
    match focus {
        ResourceKind::Cpu => ResourceKind::Memory,
        ResourceKind::Memory => ResourceKind::Disk,
        ResourceKind::Disk => ResourceKind::Network,
        ResourceKind::Network => ResourceKind::Cpu,
    }
}

pub fn prev(focus: ResourceKind) -> ResourceKind {
    match focus {
        ResourceKind::Cpu => ResourceKind::Network,
        ResourceKind::Memory => ResourceKind::Cpu,
        ResourceKind::Disk => ResourceKind::Memory,
        ResourceKind::Network => ResourceKind::Disk,
    }
}

pub fn down(focus: ResourceKind) -> ResourceKind {
    match focus {
        ResourceKind::Cpu => ResourceKind::Disk,
        ResourceKind::Memory => ResourceKind::Network,
        bottom => bottom,
    }
}

pub fn up(focus: ResourceKind) -> ResourceKind {
    match focus {
        ResourceKind::Disk => ResourceKind::Cpu,
        ResourceKind::Network => ResourceKind::Memory,
        top => top,
    }
}

pub fn step(focus: ResourceKind, direction: Direction) -> ResourceKind {
    match direction {
        Direction::Forward => next(focus),
        Direction::Backward => prev(focus),
        Direction::Up => up(focus),
        Direction::Down => down(focus),
    }
}
