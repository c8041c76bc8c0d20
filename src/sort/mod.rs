//! Column sorting for the visible product rows.
//!
//! Each sortable column maps to one comparator in a fixed table. The active
//! [`SortState`] picks the comparator and the direction; a direction of
//! [`SortDirection::None`] means no sort regardless of the stored column.
//!
//! Sorting is stable and applies only to the already-filtered slice of
//! references, never to the catalog itself.

mod collation;

pub use collation::locale_compare;

use crate::model::Product;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Columns the product table can be sorted by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Name,
    Category,
    User,
}

impl SortColumn {
    /// All columns in table order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Name, Self::Category, Self::User];

    /// Column header text.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Product",
            Self::Category => "Category",
            Self::User => "User",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Id => 0,
            Self::Name => 1,
            Self::Category => 2,
            Self::User => 3,
        }
    }

    /// Ascending comparator for this column.
    #[must_use]
    pub fn comparator(self) -> Comparator {
        COMPARATORS[self.index()]
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Name => write!(f, "name"),
            Self::Category => write!(f, "category"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Sort direction, including the unsorted third state of the toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
    None,
}

impl SortDirection {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
            Self::None => "none",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    /// Last toggled column; not authoritative when `direction` is `None`
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// The column actually ordering the rows, if any.
    #[must_use]
    pub fn active_column(&self) -> Option<SortColumn> {
        match self.direction {
            SortDirection::None => None,
            SortDirection::Ascending | SortDirection::Descending => self.column,
        }
    }

    /// Advance the three-state toggle for `column`.
    ///
    /// A different column starts ascending; the same column cycles
    /// ascending, descending, none and back to ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column != Some(column) {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
            return;
        }
        self.direction = match self.direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        };
    }
}

/// Ascending order over two products for one column.
pub type Comparator = fn(&Product, &Product) -> Ordering;

/// Per-column comparators, indexed by [`SortColumn::index`].
const COMPARATORS: [Comparator; 4] = [by_id, by_name, by_category, by_user];

fn by_id(a: &Product, b: &Product) -> Ordering {
    a.id.cmp(&b.id)
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    locale_compare(&a.name, &b.name)
}

fn by_category(a: &Product, b: &Product) -> Ordering {
    locale_compare(&a.category, &b.category)
}

fn by_user(a: &Product, b: &Product) -> Ordering {
    locale_compare(&a.user, &b.user)
}

/// Compare two products under a column and direction.
///
/// Returns `Equal` when no column is given or the direction is `None`, so a
/// stable sort leaves the filtered order untouched.
#[must_use]
pub fn compare(
    a: &Product,
    b: &Product,
    column: Option<SortColumn>,
    direction: SortDirection,
) -> Ordering {
    let Some(column) = column else {
        return Ordering::Equal;
    };
    let natural = column.comparator()(a, b);
    match direction {
        SortDirection::Ascending => natural,
        SortDirection::Descending => natural.reverse(),
        SortDirection::None => Ordering::Equal,
    }
}

/// Stable in-place sort of filtered product references.
pub fn sort_products(products: &mut [&Product], state: &SortState) {
    if let Some(column) = state.active_column() {
        products.sort_by(|a, b| compare(a, b, Some(column), state.direction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(3, "bread", "Bakery", "Bob"),
            Product::new(1, "Milk", "Dairy", "alice"),
            Product::new(2, "Apple", "Fruits", "Bob"),
            Product::new(4, "Cheese", "Dairy", "Carol"),
        ]
    }

    fn sorted_ids(products: &[Product], state: SortState) -> Vec<u32> {
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, &state);
        refs.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_toggle_cycles_three_states() {
        let mut state = SortState::default();
        state.toggle(SortColumn::Name);
        assert_eq!(state.direction, SortDirection::Ascending);
        state.toggle(SortColumn::Name);
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle(SortColumn::Name);
        assert_eq!(state.direction, SortDirection::None);
        assert_eq!(state.column, Some(SortColumn::Name));
        assert_eq!(state.active_column(), None);
        state.toggle(SortColumn::Name);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_other_column_restarts_ascending() {
        let mut state = SortState::new(SortColumn::Id, SortDirection::Descending);
        state.toggle(SortColumn::User);
        assert_eq!(state, SortState::new(SortColumn::User, SortDirection::Ascending));
    }

    #[test]
    fn test_sort_by_id_numeric() {
        let products = sample();
        let asc = sorted_ids(&products, SortState::new(SortColumn::Id, SortDirection::Ascending));
        assert_eq!(asc, vec![1, 2, 3, 4]);
        let desc = sorted_ids(&products, SortState::new(SortColumn::Id, SortDirection::Descending));
        assert_eq!(desc, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let products = sample();
        let ids = sorted_ids(&products, SortState::new(SortColumn::Name, SortDirection::Ascending));
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let products = sample();
        let ids = sorted_ids(
            &products,
            SortState::new(SortColumn::Category, SortDirection::Ascending),
        );
        assert_eq!(ids, vec![3, 1, 4, 2]);

        let ids = sorted_ids(&products, SortState::new(SortColumn::User, SortDirection::Descending));
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_direction_none_keeps_filtered_order() {
        let products = sample();
        let ids = sorted_ids(&products, SortState::new(SortColumn::Id, SortDirection::None));
        assert_eq!(ids, vec![3, 1, 2, 4]);
        assert_eq!(sorted_ids(&products, SortState::default()), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_compare_without_column_is_equal() {
        let products = sample();
        assert_eq!(
            compare(&products[0], &products[1], None, SortDirection::Ascending),
            Ordering::Equal
        );
    }

    #[test]
    fn test_comparator_table_matches_columns() {
        let a = Product::new(1, "b", "b", "b");
        let b = Product::new(2, "a", "a", "a");
        assert_eq!(SortColumn::Id.comparator()(&a, &b), Ordering::Less);
        for column in [SortColumn::Name, SortColumn::Category, SortColumn::User] {
            assert_eq!(column.comparator()(&a, &b), Ordering::Greater, "{column}");
        }
    }
}
