//! Report type definitions.

use crate::filter::FilterState;
use crate::session::Session;
use crate::sort::{SortColumn, SortState};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for listings
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, table otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Aligned table for terminal (colored)
    Table,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// The filter and sort state a listing was produced under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportContext {
    pub filter: AppliedFilter,
    pub sort: AppliedSort,
}

impl ReportContext {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            filter: AppliedFilter::from(session.filter()),
            sort: AppliedSort::from(session.sort()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppliedFilter {
    pub user: Option<String>,
    pub search: String,
    pub categories: Vec<String>,
}

impl From<&FilterState> for AppliedFilter {
    fn from(state: &FilterState) -> Self {
        Self {
            user: state.selected_user.clone(),
            search: state.search_text.clone(),
            categories: state.selected_categories.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppliedSort {
    pub column: Option<SortColumn>,
    pub direction: &'static str,
    #[serde(skip)]
    pub state: SortState,
}

impl From<&SortState> for AppliedSort {
    fn from(state: &SortState) -> Self {
        Self {
            column: state.column,
            direction: state.direction.label(),
            state: *state,
        }
    }
}
