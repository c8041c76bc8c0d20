//! Configuration validation.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BrowseConfig, CatalogConfig, ListConfig, OutputConfig, TuiConfig};
use crate::reports::ReportFormat;

/// Theme names understood by the TUI.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.catalog.validate());
        errors.extend(self.output.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> Vec<ConfigError> {
        match self.path {
            Some(ref path) if !path.exists() => vec![ConfigError::new(
                "catalog.path",
                format!("Catalog file not found: {}", path.display()),
            )],
            _ => Vec::new(),
        }
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.format == ReportFormat::Tui {
            return vec![ConfigError::new(
                "output.format",
                "'tui' is not a listing format; use the browse command instead",
            )];
        }
        Vec::new()
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            ));
        }

        if !(16..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!(
                    "Tick rate must be between 16 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            ));
        }

        errors
    }
}

impl Validatable for ListConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = CatalogConfig {
            path: self.catalog_path.clone(),
        }
        .validate();
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for BrowseConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = CatalogConfig {
            path: self.catalog_path.clone(),
        }
        .validate();
        errors.extend(self.tui.validate());
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================
