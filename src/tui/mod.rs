// Terminal dashboard: event loop, key mapping, rendering

mod app;
pub mod format;
pub mod input;
mod render;
pub mod style;
mod terminal;
mod widgets;

pub use app::{TuiOptions, run};
pub use render::render;
pub use widgets::panel_title;
