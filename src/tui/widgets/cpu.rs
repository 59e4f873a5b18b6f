// CPU panel: total and per-core bars plus a usage sparkline

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Sparkline};

use crate::state::AggregateState;
use crate::tui::format::{bar_width, format_percent, truncate, usage_bar};
use crate::tui::style::Styles;

/// The sparkline only appears once the panel has room for it and the bars.
const SPARKLINE_HEIGHT: u16 = 3;
const SPARKLINE_MIN_PANEL_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, state: &AggregateState) {
    let Some(cpu) = state.cpu.current() else {
        return;
    };

    let spark_height = if area.height >= SPARKLINE_MIN_PANEL_HEIGHT {
        SPARKLINE_HEIGHT
    } else {
        0
    };
    let [text_area, spark_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(spark_height)]).areas(area);

    let mut lines = vec![
        Line::styled(truncate(&cpu.model, area.width as usize), Styles::dim()),
        usage_line("Total: ", cpu.total_percent, area.width, 8),
    ];
    let room = (text_area.height as usize).saturating_sub(lines.len());
    let shown = cpu.per_core_percent.len().min(room);
    for (i, usage) in cpu.per_core_percent.iter().take(shown).enumerate() {
        lines.push(usage_line(&format!("Core {}: ", i + 1), *usage, area.width, 10));
    }
    if shown < cpu.core_count && room > 0 {
        // Replace the last visible core with a count of the hidden ones.
        lines.pop();
        lines.push(Line::styled(
            format!("+{} more cores", cpu.core_count - shown + 1),
            Styles::dim(),
        ));
    }
    frame.render_widget(Paragraph::new(lines), text_area);

    if spark_height > 0 {
        let history = state.cpu_history.total();
        let skip = history.len().saturating_sub(spark_area.width as usize);
        let data: Vec<u64> = history.iter().skip(skip).map(|v| v.round() as u64).collect();
        let sparkline = Sparkline::default()
            .data(&data)
            .max(100)
            .style(Styles::sparkline());
        frame.render_widget(sparkline, spark_area);
    }
}

fn usage_line(label: &str, percent: f64, width: u16, label_width: u16) -> Line<'static> {
    Line::from(vec![
        Span::raw(label.to_string()),
        Span::styled(
            usage_bar(percent, bar_width(width, label_width)),
            Styles::usage(percent),
        ),
        Span::raw(format!(" {:>6}", format_percent(percent))),
    ])
}
