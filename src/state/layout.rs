// Viewport-driven layout choice

/// Below either dimension the panels are stacked vertically.
pub const MIN_GRID_WIDTH: u16 = 80;
pub const MIN_GRID_HEIGHT: u16 = 24;

/// Borders (1 column each side of two panels), the inter-panel gap and padding.
const HORIZONTAL_CHROME: u16 = 6;
/// Header, footer and the blank lines around the grid.
const VERTICAL_CHROME: u16 = 6;

pub const MIN_PANEL_WIDTH: u16 = 30;
pub const MIN_PANEL_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Grid2x2,
    Stacked,
}

pub fn select_layout(width: u16, height: u16) -> LayoutMode {
    if width < MIN_GRID_WIDTH || height < MIN_GRID_HEIGHT {
        LayoutMode::Stacked
    } else {
        LayoutMode::Grid2x2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSize {
    pub width: u16,
    pub height: u16,
}

/// Content size of each panel in the 2x2 grid. Never smaller than 30x8, even if that means
/// the grid overflows a tiny viewport.
pub fn panel_size(width: u16, height: u16) -> PanelSize {
    PanelSize {
        width: (width.saturating_sub(HORIZONTAL_CHROME) / 2).max(MIN_PANEL_WIDTH),
        height: (height.saturating_sub(VERTICAL_CHROME) / 2).max(MIN_PANEL_HEIGHT),
    }
}
