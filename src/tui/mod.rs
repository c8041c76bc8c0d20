//! Interactive terminal UI using ratatui.
//!
//! The browse screen shows the filters panel (user tabs, search input,
//! category buttons) above the product table. Every key press or click maps
//! onto one [`Session`](crate::session::Session) action; the table is
//! re-derived from the session on each frame.

mod app;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
mod ui;
pub(crate) mod widgets;

// Theme exports
pub use theme::{
    ColorScheme, FooterHints, Styles, Theme, colors, current_theme_name, set_theme, toggle_theme,
};

pub use app::{App, ClickTarget, InputMode};
pub use constants::{MIN_HEIGHT, MIN_WIDTH};
pub use events::{Event, EventHandler, handle_key_event, handle_mouse_event};
pub use state::RowSelection;
pub use ui::{render, run_tui};
