//! Event polling and key/mouse dispatch for the browse screen.

use super::app::{App, InputMode};
use super::theme::toggle_theme;
use crate::config::TuiPreferences;
use crate::sort::SortColumn;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal tick
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    app.clear_status_message();

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.input_mode() == InputMode::Search {
        handle_search_keys(app, key, ctrl);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('u') if ctrl => app.clear_search(),
        KeyCode::Char('x') => app.clear_search(),

        // User tabs
        KeyCode::Char('0') => app.toggle_user(None),
        KeyCode::Char(c @ '1'..='9') => app.toggle_user_at(digit(c)),

        // Category buttons
        KeyCode::F(n) => app.toggle_category_at(usize::from(n)),
        KeyCode::Char('C') => app.clear_categories(),

        // Column sorting
        KeyCode::Char('i') => app.toggle_sort(SortColumn::Id),
        KeyCode::Char('n') => app.toggle_sort(SortColumn::Name),
        KeyCode::Char('g') => app.toggle_sort(SortColumn::Category),
        KeyCode::Char('u') => app.toggle_sort(SortColumn::User),

        KeyCode::Char('r') => app.reset_all(),
        KeyCode::Char('T') => {
            // Cycle theme (dark -> light -> high-contrast) and save preference
            let theme_name = toggle_theme();
            let prefs = TuiPreferences {
                theme: theme_name.to_string(),
            };
            if let Err(e) = prefs.save() {
                tracing::warn!("Failed to save theme preference: {e}");
            }
            app.set_status_message(format!("Theme: {theme_name}"));
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
}

fn handle_search_keys(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.stop_search(),
        KeyCode::Char('u') if ctrl => app.clear_search(),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Up => app.select_up(),
        KeyCode::Down => app.select_down(),
        KeyCode::Char(c) if !ctrl => app.search_push(c),
        _ => {}
    }
}

fn digit(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize)
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }
    // Clear status message on any mouse action
    app.clear_status_message();

    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_up(),
        MouseEventKind::ScrollDown => app.select_down(),
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        _ => {}
    }
}
