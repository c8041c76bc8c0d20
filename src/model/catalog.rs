//! The static catalog and its loaders.

use super::entities::{Category, Gender, Product, User};
use crate::error::{CatalogError, ErrorContext, LoadErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Dataset compiled into the binary, used when no catalog file is configured.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk shape of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CatalogFile {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// The three immutable collections a session browses.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting repeated ids and empty names.
    ///
    /// Products pointing at unknown users or categories are accepted and
    /// only logged; their display metadata degrades at render time.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self> {
        check_records("user", users.iter().map(|u| (u.id, u.name.as_str())))?;
        check_records(
            "category",
            categories.iter().map(|c| (c.id, c.name.as_str())),
        )?;
        check_records("product", products.iter().map(|p| (p.id, p.name.as_str())))?;

        let catalog = Self {
            users,
            categories,
            products,
        };
        catalog.log_dangling_references();
        Ok(catalog)
    }

    /// The dataset shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG).context("built-in catalog")
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.users, file.categories, file.products)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!(
            "Loaded catalog from {}: {} users, {} categories, {} products",
            path.display(),
            catalog.users.len(),
            catalog.categories.len(),
            catalog.products.len()
        );
        Ok(catalog)
    }

    /// Load `path` if given, otherwise fall back to the built-in dataset.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a user by exact name.
    #[must_use]
    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Look up a category by exact name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn has_user(&self, name: &str) -> bool {
        self.user(name).is_some()
    }

    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    /// Icon of the named category, if the category exists.
    #[must_use]
    pub fn category_icon(&self, name: &str) -> Option<&str> {
        self.category(name).map(|c| c.icon.as_str())
    }

    /// Gender of the named user, if the user exists.
    #[must_use]
    pub fn user_gender(&self, name: &str) -> Option<&Gender> {
        self.user(name).map(|u| &u.gender)
    }

    fn log_dangling_references(&self) {
        for product in &self.products {
            if !self.has_user(&product.user) {
                tracing::warn!(
                    "Product {} ({}) references unknown user '{}'",
                    product.id,
                    product.name,
                    product.user
                );
            }
            if !self.has_category(&product.category) {
                tracing::warn!(
                    "Product {} ({}) references unknown category '{}'",
                    product.id,
                    product.name,
                    product.category
                );
            }
        }
    }
}

fn check_records<'a>(
    collection: &'static str,
    records: impl Iterator<Item = (u32, &'a str)>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for (id, name) in records {
        if !seen.insert(id) {
            return Err(CatalogError::duplicate_id(collection, id));
        }
        if name.trim().is_empty() {
            return Err(CatalogError::load(
                format!("{collection} collection"),
                LoadErrorKind::EmptyName { collection, id },
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_consistent() {
        let catalog = Catalog::builtin().expect("built-in catalog parses");
        assert_eq!(catalog.users().len(), 4);
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.products().len(), 15);

        for product in catalog.products() {
            assert!(catalog.has_user(&product.user), "{}", product.user);
            assert!(catalog.has_category(&product.category), "{}", product.category);
        }
    }

    #[test]
    fn test_lookups_degrade_for_dangling_references() {
        let catalog = Catalog::new(
            vec![User::new(1, "Alice", Gender::Female)],
            vec![Category::new(1, "Dairy", "🥛")],
            vec![Product::new(1, "Milk", "Frozen", "Zed")],
        )
        .unwrap();

        assert_eq!(catalog.category_icon("Dairy"), Some("🥛"));
        assert_eq!(catalog.category_icon("Frozen"), None);
        assert_eq!(catalog.user_gender("Zed"), None);
    }

    #[test]
    fn test_category_lookup_is_case_sensitive() {
        let catalog = Catalog::new(vec![], vec![Category::new(1, "Dairy", "🥛")], vec![]).unwrap();
        assert!(catalog.has_category("Dairy"));
        assert!(!catalog.has_category("dairy"));
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let result = Catalog::new(
            vec![],
            vec![],
            vec![
                Product::new(1, "Milk", "Dairy", "Alice"),
                Product::new(1, "Bread", "Bakery", "Bob"),
            ],
        );
        assert!(matches!(
            result,
            Err(CatalogError::Load {
                source: LoadErrorKind::DuplicateId {
                    collection: "product",
                    id: 1
                },
                ..
            })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Catalog::new(vec![User::new(3, "  ", Gender::Male)], vec![], vec![]);
        assert!(matches!(
            result,
            Err(CatalogError::Load {
                source: LoadErrorKind::EmptyName { collection: "user", id: 3 },
                ..
            })
        ));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let catalog = Catalog::from_json_str(r#"{"products": []}"#).unwrap();
        assert!(catalog.users().is_empty());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
