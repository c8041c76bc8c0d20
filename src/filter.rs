//! Filter predicates over catalog products.
//!
//! A product is visible when it passes all three constraints of the current
//! [`FilterState`]: owner, category and name search. An unset or empty
//! constraint places no restriction, so the default state includes every
//! product.

use crate::model::Product;
use indexmap::IndexSet;

/// Active inclusion criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected owner name; `None` means all users
    pub selected_user: Option<String>,
    /// Free-text name search, stored verbatim
    pub search_text: String,
    /// Selected category names in the order they were picked
    pub selected_categories: IndexSet<String>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no constraint is active.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.selected_user.is_none()
            && self.search_text.is_empty()
            && self.selected_categories.is_empty()
    }

    #[must_use]
    pub fn is_user_selected(&self, name: &str) -> bool {
        self.selected_user.as_deref() == Some(name)
    }

    #[must_use]
    pub fn is_category_selected(&self, name: &str) -> bool {
        self.selected_categories.contains(name)
    }

    /// Owner constraint: case-insensitive equality.
    #[must_use]
    pub fn user_matches(&self, product: &Product) -> bool {
        self.selected_user
            .as_deref()
            .is_none_or(|user| product.user.to_lowercase() == user.to_lowercase())
    }

    /// Category constraint: exact membership.
    #[must_use]
    pub fn category_matches(&self, product: &Product) -> bool {
        self.selected_categories.is_empty()
            || self.selected_categories.contains(product.category.as_str())
    }

    /// Name constraint: case-insensitive substring.
    #[must_use]
    pub fn name_matches(&self, product: &Product) -> bool {
        self.search_text.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }
}

/// Whether `product` is included under `state`.
#[must_use]
pub fn matches(product: &Product, state: &FilterState) -> bool {
    state.user_matches(product) && state.category_matches(product) && state.name_matches(product)
}

/// Products passing the filter, in source order.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Milk", "Dairy", "Alice"),
            Product::new(2, "Bread", "Bakery", "Bob"),
            Product::new(3, "Buttermilk", "Dairy", "Bob"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_state_includes_everything() {
        let products = sample();
        let state = FilterState::default();
        assert!(state.is_unconstrained());
        assert!(products.iter().all(|p| matches(p, &state)));
    }

    #[test]
    fn test_user_match_ignores_case() {
        let state = FilterState {
            selected_user: Some("bob".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&sample(), &state)), vec![2, 3]);
    }

    #[test]
    fn test_category_match_is_exact() {
        let mut state = FilterState::default();
        state.selected_categories.insert("dairy".to_string());
        assert!(filter_products(&sample(), &state).is_empty());

        state.selected_categories.insert("Dairy".to_string());
        assert_eq!(ids(&filter_products(&sample(), &state)), vec![1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let state = FilterState {
            search_text: "MILK".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&sample(), &state)), vec![1, 3]);
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let state = FilterState {
            search_text: " milk".to_string(),
            ..Default::default()
        };
        assert!(filter_products(&sample(), &state).is_empty());
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let mut state = FilterState {
            selected_user: Some("Bob".to_string()),
            search_text: "milk".to_string(),
            ..Default::default()
        };
        state.selected_categories.insert("Dairy".to_string());
        assert_eq!(ids(&filter_products(&sample(), &state)), vec![3]);

        state.selected_categories.clear();
        state.selected_categories.insert("Bakery".to_string());
        assert!(filter_products(&sample(), &state).is_empty());
    }
}
