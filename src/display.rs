//! Pure display derivations.
//!
//! Everything the renderers need beyond raw records is computed here from
//! domain state: row labels, the owner style flag, sort indicators and the
//! empty-result signal. Nothing in this module knows about terminals.

use crate::model::{Catalog, Gender, Product};
use crate::sort::{SortColumn, SortDirection, SortState};
use serde::Serialize;

/// Message shown in place of the table when nothing matches.
pub const NO_MATCHING_MESSAGE: &str = "No products matching criteria";

/// Indicator next to a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    Ascending,
    Descending,
    Unsorted,
}

impl SortIcon {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
            Self::Unsorted => "↕",
        }
    }
}

/// Icon for `column` under the current sort state.
#[must_use]
pub fn sort_icon(state: &SortState, column: SortColumn) -> SortIcon {
    if state.column != Some(column) {
        return SortIcon::Unsorted;
    }
    match state.direction {
        SortDirection::Ascending => SortIcon::Ascending,
        SortDirection::Descending => SortIcon::Descending,
        SortDirection::None => SortIcon::Unsorted,
    }
}

/// Style of the owner cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStyle {
    /// Neutral link style
    Link,
    /// Warning/danger style
    Danger,
}

/// Owners whose gender is exactly `"male"` get the link style, everyone
/// else the danger style.
///
/// An owner missing from the catalog has no gender and falls on the
/// non-male branch.
#[must_use]
pub fn user_style(gender: Option<&Gender>) -> UserStyle {
    match gender {
        Some(Gender::Male) => UserStyle::Link,
        _ => UserStyle::Danger,
    }
}

/// `"{icon}-{category}"`, with an empty icon for unknown categories.
#[must_use]
pub fn category_label(icon: Option<&str>, category: &str) -> String {
    format!("{}-{}", icon.unwrap_or_default(), category)
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub user: String,
    pub user_style: UserStyle,
}

impl ProductRow {
    #[must_use]
    pub fn from_product(product: &Product, catalog: &Catalog) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: category_label(catalog.category_icon(&product.category), &product.category),
            user: product.user.clone(),
            user_style: user_style(catalog.user_gender(&product.user)),
        }
    }
}

/// Visible result of a filter+sort pass.
///
/// An empty result is its own variant so renderers cannot mistake it for an
/// empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Rows(Vec<ProductRow>),
    NoMatchingProducts,
}

impl Listing {
    #[must_use]
    pub fn from_products(products: &[&Product], catalog: &Catalog) -> Self {
        if products.is_empty() {
            return Self::NoMatchingProducts;
        }
        Self::Rows(
            products
                .iter()
                .map(|p| ProductRow::from_product(p, catalog))
                .collect(),
        )
    }

    /// Rows to display; empty for [`Listing::NoMatchingProducts`].
    #[must_use]
    pub fn rows(&self) -> &[ProductRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::NoMatchingProducts => &[],
        }
    }

    #[must_use]
    pub const fn has_matches(&self) -> bool {
        matches!(self, Self::Rows(_))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_matches()
    }
}

/// A user tab in the filter panel. `name == None` is the "All" tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTab {
    pub name: Option<String>,
    pub active: bool,
}

impl UserTab {
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("All")
    }
}

/// A category toggle button in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub name: String,
    pub icon: String,
    pub selected: bool,
}

impl CategoryButton {
    #[must_use]
    pub fn label(&self) -> String {
        category_label(Some(&self.icon), &self.name)
    }
}
