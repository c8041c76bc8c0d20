//! The filter-sort state machine.
//!
//! [`Session`] is the single owner of the catalog and of the filter and sort
//! state. Every user action is one method call that mutates that state
//! atomically; the visible rows are recomputed from scratch on demand, so no
//! derived result outlives a state change.

use crate::display::{CategoryButton, Listing, SortIcon, UserTab, sort_icon};
use crate::filter::{FilterState, filter_products};
use crate::model::{Catalog, Product};
use crate::sort::{SortColumn, SortState, sort_products};

/// One browsing session over a static catalog.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    filter: FilterState,
    sort: SortState,
}

impl Session {
    /// Start a session with default filter and sort state.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            sort: SortState::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Select `user`, or clear the selection if it is already selected.
    ///
    /// `None` is the "All" tab and always clears. Names absent from the
    /// catalog are ignored.
    pub fn toggle_user_filter(&mut self, user: Option<&str>) {
        let Some(user) = user else {
            self.filter.selected_user = None;
            tracing::debug!("user filter cleared");
            return;
        };
        if !self.catalog.has_user(user) {
            tracing::debug!("ignoring unknown user '{user}'");
            return;
        }
        if self.filter.is_user_selected(user) {
            self.filter.selected_user = None;
        } else {
            self.filter.selected_user = Some(user.to_string());
        }
        tracing::debug!(selected = ?self.filter.selected_user, "user filter toggled");
    }

    /// Add `category` to the selection, or remove it if present.
    pub fn toggle_category_filter(&mut self, category: &str) {
        if !self.catalog.has_category(category) {
            tracing::debug!("ignoring unknown category '{category}'");
            return;
        }
        if !self.filter.selected_categories.shift_remove(category) {
            self.filter.selected_categories.insert(category.to_string());
        }
        tracing::debug!(
            selected = ?self.filter.selected_categories,
            "category filter toggled"
        );
    }

    pub fn clear_categories(&mut self) {
        self.filter.selected_categories.clear();
    }

    /// Replace the search text verbatim.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    pub fn clear_search_text(&mut self) {
        self.filter.search_text.clear();
    }

    /// Whether the clear-search control should be offered.
    #[must_use]
    pub fn can_clear_search(&self) -> bool {
        !self.filter.search_text.is_empty()
    }

    /// Restore default filter and sort state.
    pub fn reset_all(&mut self) {
        self.filter = FilterState::default();
        self.sort = SortState::default();
        tracing::debug!("filters and sort reset");
    }

    /// Advance the three-state sort toggle for `column`.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        tracing::debug!(
            column = %column,
            direction = self.sort.direction.label(),
            "sort toggled"
        );
    }

    /// Filtered then sorted products.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        let mut products = filter_products(self.catalog.products(), &self.filter);
        sort_products(&mut products, &self.sort);
        products
    }

    /// Display rows for the current state, or the no-match signal.
    #[must_use]
    pub fn listing(&self) -> Listing {
        Listing::from_products(&self.visible_products(), &self.catalog)
    }

    #[must_use]
    pub fn sort_icon(&self, column: SortColumn) -> SortIcon {
        sort_icon(&self.sort, column)
    }

    /// "All" followed by one tab per catalog user.
    #[must_use]
    pub fn user_tabs(&self) -> Vec<UserTab> {
        let all = UserTab {
            name: None,
            active: self.filter.selected_user.is_none(),
        };
        std::iter::once(all)
            .chain(self.catalog.users().iter().map(|u| UserTab {
                name: Some(u.name.clone()),
                active: self.filter.is_user_selected(&u.name),
            }))
            .collect()
    }

    /// One button per catalog category.
    #[must_use]
    pub fn category_buttons(&self) -> Vec<CategoryButton> {
        self.catalog
            .categories()
            .iter()
            .map(|c| CategoryButton {
                name: c.name.clone(),
                icon: c.icon.clone(),
                selected: self.filter.is_category_selected(&c.name),
            })
            .collect()
    }

    /// The "All" categories button is solid only when nothing is selected.
    #[must_use]
    pub fn all_categories_active(&self) -> bool {
        self.filter.selected_categories.is_empty()
    }
}
