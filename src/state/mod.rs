// Aggregate dashboard state and the reducer that advances it.
//
// The state is a plain value: `reduce` takes the previous state by value and returns the next
// one, so a reader never observes a half-applied event. Each sample result is its own event
// and touches exactly one resource.

mod component;
pub mod focus;
pub mod layout;

pub use component::{ComponentStatus, Health, ResourceState};
pub use focus::Direction;
pub use layout::{LayoutMode, PanelSize};

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};

use crate::error::CollectError;
use crate::models::{
    CpuSnapshot, DiskSetSnapshot, MemorySnapshot, NetworkSetSnapshot, RateSample, ResourceKind,
    Snapshot,
};
use crate::rates::compute_rates;

/// Default number of CPU samples kept for the usage sparkline.
pub const DEFAULT_CPU_HISTORY: usize = 60;

/// Logical key presses the reducer understands. Terminal key codes are mapped onto these by
/// the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Quit,
    ToggleHelp,
    /// Closes the help overlay if it is open.
    Escape,
    Refresh,
    Navigate(Direction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A sampling round started, either on schedule or on manual refresh.
    Tick { at: DateTime<Utc> },
    SampleSucceeded(Snapshot),
    SampleFailed(ResourceKind, CollectError),
    KeyPressed(Key),
    ViewportResized { width: u16, height: u16 },
}

/// Side effects requested by the reducer; carried out by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Quit,
    /// Start an out-of-cycle sampling round.
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Bounded CPU usage history, one series for the total and one per core.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuHistory {
    capacity: usize,
    total: VecDeque<f64>,
    per_core: Vec<VecDeque<f64>>,
}

impl CpuHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            total: VecDeque::with_capacity(capacity),
            per_core: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn total(&self) -> &VecDeque<f64> {
        &self.total
    }

    pub fn per_core(&self) -> &[VecDeque<f64>] {
        &self.per_core
    }

    fn push(mut self, snapshot: &CpuSnapshot) -> Self {
        // A changed core count (CPU hotplug) makes the old per-core series meaningless.
        if self.per_core.len() != snapshot.per_core_percent.len() {
            self.per_core =
                vec![VecDeque::with_capacity(self.capacity); snapshot.per_core_percent.len()];
        }
        push_bounded(&mut self.total, snapshot.total_percent, self.capacity);
        for (series, value) in self.per_core.iter_mut().zip(&snapshot.per_core_percent) {
            push_bounded(series, *value, self.capacity);
        }
        self
    }
}

fn push_bounded(series: &mut VecDeque<f64>, value: f64, capacity: usize) {
    if series.len() == capacity {
        series.pop_front();
    }
    series.push_back(value);
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateState {
    pub cpu: ResourceState<CpuSnapshot>,
    pub memory: ResourceState<MemorySnapshot>,
    pub disk: ResourceState<DiskSetSnapshot>,
    /// The latest network snapshot doubles as the baseline for the next rate computation.
    pub network: ResourceState<NetworkSetSnapshot>,
    /// Rates from the two most recent successful network samples.
    pub rates: BTreeMap<String, RateSample>,
    pub cpu_history: CpuHistory,
    pub focus: ResourceKind,
    pub viewport: Viewport,
    pub show_help: bool,
    pub rounds: u64,
    pub last_tick_at: Option<DateTime<Utc>>,
}

impl AggregateState {
    pub fn new(width: u16, height: u16, cpu_history_len: usize) -> Self {
        Self {
            cpu: ResourceState::default(),
            memory: ResourceState::default(),
            disk: ResourceState::default(),
            network: ResourceState::default(),
            rates: BTreeMap::new(),
            cpu_history: CpuHistory::new(cpu_history_len),
            focus: ResourceKind::Cpu,
            viewport: Viewport { width, height },
            show_help: false,
            rounds: 0,
            last_tick_at: None,
        }
    }

    pub fn status(&self, kind: ResourceKind) -> &ComponentStatus {
        match kind {
            ResourceKind::Cpu => &self.cpu.status,
            ResourceKind::Memory => &self.memory.status,
            ResourceKind::Disk => &self.disk.status,
            ResourceKind::Network => &self.network.status,
        }
    }

    pub fn health(&self, kind: ResourceKind) -> Health {
        self.status(kind).health()
    }

    /// Layout for the current viewport; computed on demand, never cached.
    pub fn layout(&self) -> LayoutMode {
        layout::select_layout(self.viewport.width, self.viewport.height)
    }

    pub fn panel_size(&self) -> PanelSize {
        layout::panel_size(self.viewport.width, self.viewport.height)
    }

    /// Panels with something to show: data or an error.
    pub fn has_content(&self, kind: ResourceKind) -> bool {
        self.health(kind) != Health::NotSampled
    }
}

impl Default for AggregateState {
    fn default() -> Self {
        Self::new(
            layout::MIN_GRID_WIDTH,
            layout::MIN_GRID_HEIGHT,
            DEFAULT_CPU_HISTORY,
        )
    }
}

/// Applies one event. Pure: no I/O, no clock reads; time comes from the event payload.
pub fn reduce(state: AggregateState, event: Event) -> (AggregateState, Option<Effect>) {
    match event {
        Event::Tick { at } => (
            AggregateState {
                rounds: state.rounds + 1,
                last_tick_at: Some(at),
                ..state
            },
            None,
        ),
        Event::SampleSucceeded(snapshot) => (apply_snapshot(state, snapshot), None),
        Event::SampleFailed(kind, error) => (apply_failure(state, kind, error), None),
        Event::KeyPressed(key) => apply_key(state, key),
        Event::ViewportResized { width, height } => (
            AggregateState {
                viewport: Viewport { width, height },
                ..state
            },
            None,
        ),
    }
}

fn apply_snapshot(state: AggregateState, snapshot: Snapshot) -> AggregateState {
    let at = snapshot.captured_at();
    match snapshot {
        Snapshot::Cpu(cpu) => AggregateState {
            cpu_history: state.cpu_history.push(&cpu),
            cpu: state.cpu.succeeded(cpu, at),
            ..state
        },
        Snapshot::Memory(memory) => AggregateState {
            memory: state.memory.succeeded(memory, at),
            ..state
        },
        Snapshot::Disk(disk) => AggregateState {
            disk: state.disk.succeeded(disk, at),
            ..state
        },
        Snapshot::Network(network) => {
            let rates = match state.network.snapshot.as_ref() {
                Some(previous) => compute_rates(Some(previous), &network),
                None => state.rates,
            };
            AggregateState {
                rates,
                network: state.network.succeeded(network, at),
                ..state
            }
        }
    }
}

fn apply_failure(state: AggregateState, kind: ResourceKind, error: CollectError) -> AggregateState {
    match kind {
        ResourceKind::Cpu => AggregateState {
            cpu: state.cpu.failed(error),
            ..state
        },
        ResourceKind::Memory => AggregateState {
            memory: state.memory.failed(error),
            ..state
        },
        ResourceKind::Disk => AggregateState {
            disk: state.disk.failed(error),
            ..state
        },
        ResourceKind::Network => AggregateState {
            network: state.network.failed(error),
            ..state
        },
    }
}

fn apply_key(state: AggregateState, key: Key) -> (AggregateState, Option<Effect>) {
    match key {
        Key::Quit => (state, Some(Effect::Quit)),
        Key::Refresh => (state, Some(Effect::Refresh)),
        Key::ToggleHelp => (
            AggregateState {
                show_help: !state.show_help,
                ..state
            },
            None,
        ),
        Key::Escape => (
            AggregateState {
                show_help: false,
                ..state
            },
            None,
        ),
        Key::Navigate(direction) => (
            AggregateState {
                focus: focus::step(state.focus, direction),
                ..state
            },
            None,
        ),
    }
}
