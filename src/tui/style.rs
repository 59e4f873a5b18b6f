// Color scheme and styles. Stateless: every style is a function of its arguments.

use ratatui::style::{Color, Modifier, Style};

use crate::models::{ActivityLevel, UsageLevel, usage_level};
use crate::state::Health;

pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;

    pub const NORMAL: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const CRITICAL: Color = Color::Red;

    pub const FOCUSED_BORDER: Color = Color::Cyan;
    pub const BORDER: Color = Color::DarkGray;

    pub const CPU_COLOR: Color = Color::Cyan;
}

pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Theme::FG)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    pub fn title(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Theme::FOCUSED_BORDER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
        }
    }

    /// Focus wins over health so the cursor stays visible on a failing panel.
    pub fn border(focused: bool, health: Health) -> Style {
        match (focused, health) {
            (true, _) => Style::default().fg(Theme::FOCUSED_BORDER),
            (false, Health::Degraded) => Style::default().fg(Theme::CRITICAL),
            (false, _) => Style::default().fg(Theme::BORDER),
        }
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Theme::CRITICAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn level(level: UsageLevel) -> Style {
        match level {
            UsageLevel::Normal => Style::default().fg(Theme::NORMAL),
            UsageLevel::Warning => Style::default().fg(Theme::WARNING),
            UsageLevel::Critical => Style::default()
                .fg(Theme::CRITICAL)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn usage(percent: f64) -> Style {
        Self::level(usage_level(percent))
    }

    pub fn activity(level: ActivityLevel) -> Style {
        match level {
            ActivityLevel::Idle => Self::dim(),
            ActivityLevel::Low => Style::default().fg(Theme::NORMAL),
            ActivityLevel::Medium => Style::default().fg(Theme::WARNING),
            ActivityLevel::High => Style::default()
                .fg(Theme::CRITICAL)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn sparkline() -> Style {
        Style::default().fg(Theme::CPU_COLOR)
    }

    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}
