// Memory panel: RAM and swap

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AggregateState;
use crate::tui::format::{bar_width, format_bytes, format_percent, usage_bar};
use crate::tui::style::Styles;

pub fn render(frame: &mut Frame, area: Rect, state: &AggregateState) {
    let Some(memory) = state.memory.current() else {
        return;
    };
    let ram_percent = memory.usage_percent();
    let bar = bar_width(area.width, 6);

    let mut lines = vec![
        Line::from(vec![
            Span::raw("RAM:  "),
            Span::styled(usage_bar(ram_percent, bar), Styles::usage(ram_percent)),
            Span::raw(format!(" {:>6}", format_percent(ram_percent))),
        ]),
        Line::raw(format!(
            "      {} / {}",
            format_bytes(memory.used),
            format_bytes(memory.total)
        )),
        Line::styled(
            format!("      {} available", format_bytes(memory.available)),
            Styles::dim(),
        ),
        Line::raw(""),
    ];

    if memory.has_swap() {
        let swap_percent = memory.swap_usage_percent();
        lines.push(Line::from(vec![
            Span::raw("Swap: "),
            Span::styled(usage_bar(swap_percent, bar), Styles::usage(swap_percent)),
            Span::raw(format!(" {:>6}", format_percent(swap_percent))),
        ]));
        lines.push(Line::raw(format!(
            "      {} / {}",
            format_bytes(memory.swap.used),
            format_bytes(memory.swap.total)
        )));
    } else {
        lines.push(Line::styled("Swap: none", Styles::dim()));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
