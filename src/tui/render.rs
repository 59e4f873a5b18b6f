// Top-level frame: header, panels, footer, help overlay

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::models::ResourceKind;
use crate::state::{AggregateState, LayoutMode};
use crate::version;

use super::style::Styles;
use super::widgets::{render_help, render_panel};

/// Draws the whole dashboard from the current state. Reads only; never mutates.
pub fn render(frame: &mut Frame, state: &AggregateState) {
    let area = frame.area();
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, state);
    match state.layout() {
        LayoutMode::Grid2x2 => render_grid(frame, body, state),
        LayoutMode::Stacked => render_stacked(frame, body, state),
    }
    render_footer(frame, footer, state);

    if state.show_help {
        render_help(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AggregateState) {
    let updated = state
        .last_tick_at
        .map(|at| {
            at.with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "--:--:--".to_string());
    let line = Line::from(vec![
        Span::raw(format!(" {} ", version::display())),
        Span::raw("│ System Monitor "),
        Span::raw(format!("│ round {} │ {} ", state.rounds, updated)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Styles::header()), area);
}

/// 2x2 grid with every panel sized from the viewport, even before its first sample.
fn render_grid(frame: &mut Frame, area: Rect, state: &AggregateState) {
    let panel = state.panel_size();
    // Content size plus one border cell on each side.
    let outer_width = panel.width.saturating_add(2);
    let outer_height = panel.height.saturating_add(2);

    let rows = Layout::vertical([Constraint::Length(outer_height); 2]).split(area);
    for (row_index, row) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(outer_width); 2])
            .spacing(1)
            .split(*row);
        for (col_index, cell) in cols.iter().enumerate() {
            let kind = ResourceKind::ALL[row_index * 2 + col_index];
            render_panel(frame, *cell, state, kind);
        }
    }
}

/// Narrow or short terminals: one column, only panels that have something to show.
fn render_stacked(frame: &mut Frame, area: Rect, state: &AggregateState) {
    let kinds: Vec<ResourceKind> = ResourceKind::ALL
        .into_iter()
        .filter(|kind| state.has_content(*kind))
        .collect();
    if kinds.is_empty() {
        let line = Line::styled("Collecting system information...", Styles::dim());
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let count = kinds.len() as u32;
    let chunks = Layout::vertical(vec![Constraint::Ratio(1, count); kinds.len()]).split(area);
    for (kind, chunk) in kinds.into_iter().zip(chunks.iter()) {
        render_panel(frame, *chunk, state, kind);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AggregateState) {
    let mut spans = Vec::new();
    for (key, what) in [
        ("q", "quit"),
        ("arrows/tab", "navigate"),
        ("r", "refresh"),
        ("?", "help"),
    ] {
        spans.push(Span::styled(format!(" {key}"), Styles::help_key()));
        spans.push(Span::styled(format!(": {what} "), Styles::dim()));
    }
    spans.push(Span::styled(
        format!("│ {}", state.focus.label()),
        Styles::text(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
