// Panel widgets. Each panel draws its own border; the body depends on the resource's health.

mod cpu;
mod disk;
mod help;
mod memory;
mod network;

pub use help::render_help;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::models::ResourceKind;
use crate::state::{AggregateState, ComponentStatus, Health};

use super::style::Styles;

pub fn panel_title(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Cpu => "CPU Usage",
        ResourceKind::Memory => "Memory Usage",
        ResourceKind::Disk => "Disk Usage",
        ResourceKind::Network => "Network Activity",
    }
}

/// Draws one resource panel into `area`.
pub fn render_panel(frame: &mut Frame, area: Rect, state: &AggregateState, kind: ResourceKind) {
    let focused = state.focus == kind;
    let health = state.health(kind);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused, health))
        .title(Span::styled(
            format!(" {} ", panel_title(kind)),
            Styles::title(focused),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match health {
        Health::NotSampled => render_loading(frame, inner, kind),
        Health::Degraded => render_unavailable(frame, inner, kind, state.status(kind)),
        Health::Healthy => match kind {
            ResourceKind::Cpu => cpu::render(frame, inner, state),
            ResourceKind::Memory => memory::render(frame, inner, state),
            ResourceKind::Disk => disk::render(frame, inner, state),
            ResourceKind::Network => network::render(frame, inner, state),
        },
    }
}

fn render_loading(frame: &mut Frame, area: Rect, kind: ResourceKind) {
    let what = match kind {
        ResourceKind::Cpu => "CPU",
        ResourceKind::Memory => "memory",
        ResourceKind::Disk => "disk",
        ResourceKind::Network => "network",
    };
    let line = Line::styled(format!("Loading {what} data..."), Styles::dim());
    frame.render_widget(Paragraph::new(line), area);
}

/// Placeholder rows shown instead of data while a resource is failing.
fn unavailable_rows(kind: ResourceKind) -> [&'static str; 2] {
    match kind {
        ResourceKind::Cpu => ["Total: N/A", "Cores: N/A"],
        ResourceKind::Memory => ["RAM: N/A", "Swap: N/A"],
        ResourceKind::Disk => ["Filesystems: N/A", "Usage: N/A"],
        ResourceKind::Network => ["Interfaces: N/A", "Activity: N/A"],
    }
}

fn render_unavailable(frame: &mut Frame, area: Rect, kind: ResourceKind, status: &ComponentStatus) {
    let mut lines = Vec::new();
    if let Some(err) = &status.last_error {
        lines.push(Line::styled(format!("Error: {}", err.message), Styles::error()));
    }
    lines.push(Line::styled(
        format!("{} data unavailable", kind.label()),
        Styles::dim(),
    ));
    lines.push(Line::raw(""));
    lines.extend(unavailable_rows(kind).into_iter().map(Line::raw));

    let mut detail = Vec::new();
    if let Some(err) = &status.last_error {
        detail.push(err.kind.label().to_string());
    }
    if status.consecutive_failures > 1 {
        detail.push(format!("{} failures in a row", status.consecutive_failures));
    }
    if let Some(at) = status.last_success_at {
        detail.push(format!(
            "last ok {}",
            at.with_timezone(&chrono::Local).format("%H:%M:%S")
        ));
    }
    if !detail.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(detail.join(" · "), Styles::dim()));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
