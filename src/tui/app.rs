//! Browse-screen application state.
//!
//! [`App`] wraps a [`Session`] with the terminal-only concerns: which widget
//! has keyboard focus, the highlighted row, the status line and the
//! clickable regions recorded by the last render.

use super::constants::MAX_SHORTCUT_ITEMS;
use super::state::RowSelection;
use crate::config::TuiConfig;
use crate::display::{Listing, ProductRow};
use crate::session::Session;
use crate::sort::SortColumn;
use ratatui::layout::{Position, Rect};

/// Where key presses go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key shortcuts
    #[default]
    Normal,
    /// Keys edit the search text
    Search,
}

/// Something the mouse can click, as laid out by the last render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A user tab; `None` is "All"
    User(Option<String>),
    Category(String),
    AllCategories,
    SearchInput,
    ClearSearch,
    ResetAll,
    SortHeader(SortColumn),
    Row(usize),
}

/// Browse application state
#[derive(Debug)]
pub struct App {
    session: Session,
    pub(crate) input_mode: InputMode,
    pub(crate) rows: RowSelection,
    pub(crate) should_quit: bool,
    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,
    pub(crate) mouse_enabled: bool,
    pub(crate) tick_rate_ms: u64,
    pub(crate) click_targets: Vec<(Rect, ClickTarget)>,
}

impl App {
    #[must_use]
    pub fn new(session: Session, config: &TuiConfig) -> Self {
        let total = session.visible_products().len();
        Self {
            session,
            input_mode: InputMode::Normal,
            rows: RowSelection::new(total),
            should_quit: false,
            status_message: None,
            mouse_enabled: config.mouse_enabled,
            tick_rate_ms: config.tick_rate_ms,
            click_targets: Vec::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.rows.index()
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The row under the selection, if any product is visible.
    #[must_use]
    pub fn selected_row(&self) -> Option<ProductRow> {
        match self.session.listing() {
            Listing::Rows(rows) => rows.into_iter().nth(self.rows.index()),
            Listing::NoMatchingProducts => None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Drop the status message; called before handling each key.
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Re-derive the row count after a session action.
    fn refresh(&mut self) {
        self.rows.resize(self.session.visible_products().len());
    }

    // ------------------------------------------------------------------
    // Session actions
    // ------------------------------------------------------------------

    pub fn toggle_user(&mut self, user: Option<&str>) {
        self.session.toggle_user_filter(user);
        self.refresh();
    }

    /// Toggle the user behind shortcut `n` (1-based, catalog order).
    pub fn toggle_user_at(&mut self, n: usize) {
        if !(1..=MAX_SHORTCUT_ITEMS).contains(&n) {
            return;
        }
        let Some(name) = self
            .session
            .catalog()
            .users()
            .get(n - 1)
            .map(|u| u.name.clone())
        else {
            return;
        };
        self.toggle_user(Some(&name));
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.session.toggle_category_filter(category);
        self.refresh();
    }

    /// Toggle the category behind shortcut `n` (1-based, catalog order).
    pub fn toggle_category_at(&mut self, n: usize) {
        if !(1..=MAX_SHORTCUT_ITEMS).contains(&n) {
            return;
        }
        let Some(name) = self
            .session
            .catalog()
            .categories()
            .get(n - 1)
            .map(|c| c.name.clone())
        else {
            return;
        };
        self.toggle_category(&name);
    }

    pub fn clear_categories(&mut self) {
        self.session.clear_categories();
        self.refresh();
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.session.toggle_sort(column);
        self.refresh();
    }

    pub fn reset_all(&mut self) {
        self.session.reset_all();
        self.input_mode = InputMode::Normal;
        self.rows.first();
        self.refresh();
        self.set_status_message("Filters reset");
    }

    // ------------------------------------------------------------------
    // Search input
    // ------------------------------------------------------------------

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_push(&mut self, c: char) {
        let mut text = self.session.filter().search_text.clone();
        text.push(c);
        self.session.set_search_text(text);
        self.refresh();
    }

    pub fn search_pop(&mut self) {
        let mut text = self.session.filter().search_text.clone();
        if text.pop().is_some() {
            self.session.set_search_text(text);
            self.refresh();
        }
    }

    /// Clear the search text; a no-op while the clear control is hidden.
    pub fn clear_search(&mut self) {
        if self.session.can_clear_search() {
            self.session.clear_search_text();
            self.refresh();
        }
    }

    // ------------------------------------------------------------------
    // Row navigation
    // ------------------------------------------------------------------

    pub fn select_up(&mut self) {
        self.rows.up();
    }

    pub fn select_down(&mut self) {
        self.rows.down();
    }

    pub fn page_up(&mut self) {
        self.rows.page_up();
    }

    pub fn page_down(&mut self) {
        self.rows.page_down();
    }

    pub fn select_first(&mut self) {
        self.rows.first();
    }

    pub fn select_last(&mut self) {
        self.rows.last_row();
    }

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    /// Target under a screen cell, from the last render.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<&ClickTarget> {
        let position = Position::new(column, row);
        self.click_targets
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, target)| target)
    }

    /// Apply the action for a left click at a screen cell.
    pub fn click(&mut self, column: u16, row: u16) {
        let Some(target) = self.target_at(column, row).cloned() else {
            return;
        };
        if target != ClickTarget::SearchInput {
            self.input_mode = InputMode::Normal;
        }
        match target {
            ClickTarget::User(user) => self.toggle_user(user.as_deref()),
            ClickTarget::Category(category) => self.toggle_category(&category),
            ClickTarget::AllCategories => self.clear_categories(),
            ClickTarget::SearchInput => self.start_search(),
            ClickTarget::ClearSearch => self.clear_search(),
            ClickTarget::ResetAll => self.reset_all(),
            ClickTarget::SortHeader(column) => self.toggle_sort(column),
            ClickTarget::Row(index) => self.rows.select(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;
    use crate::sort::SortDirection;

    fn browse_app() -> App {
        App::new(
            Session::new(Catalog::builtin().unwrap()),
            &TuiConfig::default(),
        )
    }

    #[test]
    fn test_selection_clamped_after_filtering() {
        let mut app = browse_app();
        app.select_last();
        assert_eq!(app.selected_index(), 14);

        app.toggle_category_at(3); // Fruits
        assert_eq!(app.rows.len(), 2);
        assert_eq!(app.selected_index(), 1);
        assert_eq!(app.selected_row().unwrap().name, "Apple");
    }

    #[test]
    fn test_shortcut_indices_out_of_range_are_ignored() {
        let mut app = browse_app();
        app.toggle_user_at(0);
        app.toggle_user_at(5);
        app.toggle_category_at(9);
        assert!(app.session().filter().is_unconstrained());
    }

    #[test]
    fn test_search_editing() {
        let mut app = browse_app();
        app.start_search();
        for c in "tea".chars() {
            app.search_push(c);
        }
        assert_eq!(app.session().filter().search_text, "tea");
        assert_eq!(app.rows.len(), 1);

        app.search_pop();
        assert_eq!(app.session().filter().search_text, "te");

        app.clear_search();
        assert_eq!(app.session().filter().search_text, "");
        assert_eq!(app.rows.len(), 15);
    }

    #[test]
    fn test_empty_result_has_no_selected_row() {
        let mut app = browse_app();
        for c in "zzz".chars() {
            app.search_push(c);
        }
        assert_eq!(app.rows.len(), 0);
        assert_eq!(app.selected_row(), None);
    }

    #[test]
    fn test_click_targets() {
        let mut app = browse_app();
        app.click_targets = vec![
            (Rect::new(0, 0, 6, 1), ClickTarget::SortHeader(SortColumn::Id)),
            (Rect::new(0, 1, 6, 1), ClickTarget::User(Some("Max".to_string()))),
        ];

        app.click(3, 0);
        assert_eq!(app.session().sort().column, Some(SortColumn::Id));
        assert_eq!(app.session().sort().direction, SortDirection::Ascending);

        app.click(3, 1);
        assert_eq!(app.session().filter().selected_user.as_deref(), Some("Max"));

        // Outside every target
        app.click(40, 40);
        assert_eq!(app.rows.len(), 3);
    }

    #[test]
    fn test_reset_all_leaves_search_mode() {
        let mut app = browse_app();
        app.start_search();
        app.search_push('m');
        app.reset_all();
        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.status_message(), Some("Filters reset"));
        assert_eq!(app.rows.len(), 15);
    }
}
