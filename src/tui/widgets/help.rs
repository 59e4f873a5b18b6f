// Keyboard help overlay

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

const BINDINGS: &[(&str, &str)] = &[
    ("←/→, Tab, l", "Move focus between panels"),
    ("↑/↓, k/j", "Move focus between rows"),
    ("Shift+Tab", "Move focus backwards"),
    ("r", "Refresh now"),
    ("?, h", "Toggle this help"),
    ("Esc", "Close this help"),
    ("q, Ctrl+C", "Quit"),
];

const PANELS: &[(&str, &str)] = &[
    ("CPU", "Total and per-core usage"),
    ("Memory", "RAM and swap usage"),
    ("Disk", "Filesystem usage and warnings"),
    ("Network", "Interface activity and rates"),
];

/// Centered popup, 60% x 80% of the screen clamped to 40..80 x 10..24 and never larger than
/// the screen itself.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let width = percent_of(area.width, 60).clamp(40, 80).min(area.width);
    let height = percent_of(area.height, 80).clamp(10, 24).min(area.height);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::styled("Keys", Styles::title(false)), Line::raw("")];
    lines.extend(BINDINGS.iter().map(|(keys, what)| row(keys, what)));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Panels", Styles::title(false)));
    lines.push(Line::raw(""));
    lines.extend(PANELS.iter().map(|(name, what)| row(name, what)));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::border(true, crate::state::Health::Healthy));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// `pct` percent of `len`, in u32 so wide terminals cannot overflow.
fn percent_of(len: u16, pct: u32) -> u16 {
    u16::try_from(u32::from(len) * pct / 100).unwrap_or(u16::MAX)
}

fn row(keys: &str, what: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<14}"), Styles::help_key()),
        Span::raw(what.to_string()),
    ])
}
