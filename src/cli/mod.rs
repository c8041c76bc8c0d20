//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod browse;
mod list;

pub use browse::run_browse;
pub use list::{build_session, render_listing, run_list};

// Re-export config types used by handlers
pub use crate::config::{BrowseConfig, ListConfig, ListQuery};

/// Process exit codes
pub mod exit_codes {
    /// At least one product matched (or the TUI exited normally)
    pub const SUCCESS: i32 = 0;
    /// The listing was empty
    pub const NO_MATCHES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
