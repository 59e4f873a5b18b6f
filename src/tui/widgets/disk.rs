// Disk panel: one bar per mounted filesystem, warnings first

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AggregateState;
use crate::tui::format::{bar_width, format_bytes, format_percent, truncate, usage_bar};
use crate::tui::style::Styles;

const NAME_WIDTH: usize = 15;

pub fn render(frame: &mut Frame, area: Rect, state: &AggregateState) {
    let Some(disks) = state.disk.current() else {
        return;
    };
    let bar = bar_width(area.width, NAME_WIDTH as u16 + 1);

    let overall = disks.overall_usage_percent();
    let mut lines = vec![Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            format!(
                "{} / {} ({})",
                format_bytes(disks.used_space()),
                format_bytes(disks.total_space()),
                format_percent(overall)
            ),
            Styles::usage(overall),
        ),
    ])];

    let critical = disks.critical().count();
    let warning = disks.warning_or_worse().count() - critical;
    if critical > 0 {
        lines.push(Line::styled(
            format!("{critical} filesystem(s) critically full"),
            Styles::usage(100.0),
        ));
    }
    if warning > 0 {
        lines.push(Line::styled(
            format!("{warning} filesystem(s) above 70%"),
            Styles::usage(crate::models::WARNING_PERCENT),
        ));
    }
    lines.push(Line::raw(""));

    for entry in &disks.entries {
        lines.push(Line::from(vec![
            Span::raw(format!(
                "{:<width$} ",
                truncate(&entry.mount_point, NAME_WIDTH),
                width = NAME_WIDTH
            )),
            Span::styled(
                usage_bar(entry.used_percent, bar),
                Styles::usage(entry.used_percent),
            ),
            Span::raw(format!(" {:>6}", format_percent(entry.used_percent))),
        ]));
        lines.push(Line::styled(
            format!(
                "{:<width$} {} / {} {}",
                truncate(&entry.device, NAME_WIDTH),
                format_bytes(entry.used),
                format_bytes(entry.total),
                entry.file_system,
                width = NAME_WIDTH
            ),
            Styles::dim(),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
