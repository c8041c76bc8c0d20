//! Configuration module for product-categories.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use product_categories::config::{AppConfig, load_or_default};
//! use product_categories::sort::SortColumn;
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .sort(Some(SortColumn::Name), false)
//!     .theme("light")
//!     .build();
//!
//! // Load from file
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.product-categories.yaml` file in the working directory or
//! `~/.config/product-categories/`:
//!
//! ```yaml
//! catalog:
//!   path: ./catalog.json
//! listing:
//!   sort_column: name
//! tui:
//!   theme: light
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BrowseConfig, CatalogConfig, ListConfig, ListQuery,
    ListingConfig, OutputConfig, TuiConfig, TuiPreferences,
};
pub use validation::{ConfigError, VALID_THEMES, Validatable};

pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, generate_full_example_config,
    load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all options that can be set in
/// `.product-categories.yaml` files. Editors can use it for validation and
/// autocompletion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
