//! Configuration types for product-categories.
//!
//! Provides structured configuration for the browse and list commands.

use crate::reports::ReportFormat;
use crate::sort::{SortColumn, SortDirection, SortState};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration loaded from a config file and CLI args.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where the static collections come from
    pub catalog: CatalogConfig,
    /// Output configuration for the list command
    pub output: OutputConfig,
    /// Initial ordering for the list command
    pub listing: ListingConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the catalog file.
    pub fn catalog_path(mut self, path: Option<PathBuf>) -> Self {
        self.config.catalog.path = path;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the initial sort for listings.
    pub const fn sort(mut self, column: Option<SortColumn>, descending: bool) -> Self {
        self.config.listing.sort_column = column;
        self.config.listing.sort_descending = descending;
        self
    }

    /// Set the TUI theme.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in dataset is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for listings
    pub format: ReportFormat,
    /// Disable colored output
    pub no_color: bool,
}

/// Initial ordering applied before any interactive sort toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ListingConfig {
    /// Column to sort by; unsorted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<SortColumn>,
    /// Sort descending instead of ascending
    pub sort_descending: bool,
}

impl ListingConfig {
    /// The sort state this configuration describes.
    #[must_use]
    pub fn sort_state(&self) -> SortState {
        match self.sort_column {
            Some(column) if self.sort_descending => {
                SortState::new(column, SortDirection::Descending)
            }
            Some(column) => SortState::new(column, SortDirection::Ascending),
            None => SortState::default(),
        }
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// TUI preferences that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("product-categories").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support (clicking column headers toggles sort)
    pub mouse_enabled: bool,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mouse_enabled: true,
            tick_rate_ms: 250,
        }
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Non-interactive filter actions applied by the list command, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Owner to select
    pub user: Option<String>,
    /// Search text
    pub search: Option<String>,
    /// Categories to toggle on
    pub categories: Vec<String>,
}

/// Configuration for the list command.
#[derive(Debug, Clone, Default)]
pub struct ListConfig {
    pub catalog_path: Option<PathBuf>,
    pub output: OutputConfig,
    /// Write the listing here instead of stdout
    pub output_file: Option<PathBuf>,
    pub listing: ListingConfig,
    pub query: ListQuery,
}

/// Configuration for the browse command.
#[derive(Debug, Clone, Default)]
pub struct BrowseConfig {
    pub catalog_path: Option<PathBuf>,
    pub tui: TuiConfig,
}
