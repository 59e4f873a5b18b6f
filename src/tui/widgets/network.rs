// Network panel: per-interface throughput and cumulative totals

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::rates::{total_recv_rate, total_send_rate};
use crate::state::AggregateState;
use crate::tui::format::{format_bytes, format_rate, truncate};
use crate::tui::style::Styles;

const NAME_WIDTH: usize = 12;

pub fn render(frame: &mut Frame, area: Rect, state: &AggregateState) {
    let Some(network) = state.network.current() else {
        return;
    };

    let mut lines = Vec::new();
    for iface in &network.interfaces {
        let name = truncate(&iface.name, NAME_WIDTH);
        let line = match state.rates.get(&iface.name) {
            Some(rate) => Line::styled(
                format!(
                    "{name:<NAME_WIDTH$} ↑ {:>8} ↓ {:>8}",
                    format_rate(rate.send_bytes_per_sec),
                    format_rate(rate.recv_bytes_per_sec)
                ),
                Styles::activity(rate.activity()),
            ),
            None => Line::styled(
                format!("{name:<NAME_WIDTH$} ↑ {:>8} ↓ {:>8}", "N/A", "N/A"),
                Styles::dim(),
            ),
        };
        lines.push(line);
    }

    if state.rates.is_empty() {
        lines.push(Line::styled("Calculating rates...", Styles::dim()));
    } else {
        lines.push(Line::raw(format!(
            "{:<NAME_WIDTH$} ↑ {:>8} ↓ {:>8}",
            "Total",
            format_rate(total_send_rate(&state.rates)),
            format_rate(total_recv_rate(&state.rates))
        )));
    }

    lines.push(Line::raw(""));
    for iface in &network.interfaces {
        lines.push(Line::styled(
            format!(
                "{:<NAME_WIDTH$} sent {} recv {}",
                truncate(&iface.name, NAME_WIDTH),
                format_bytes(iface.bytes_sent),
                format_bytes(iface.bytes_recv)
            ),
            Styles::dim(),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
