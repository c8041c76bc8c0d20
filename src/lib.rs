//! # product-categories
//!
//! `product-categories` is a terminal browser for a small, fixed product
//! catalog. It narrows the product table by owner, by product name and by
//! category, and orders it by any column.
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Catalog**: The static users, categories and products, loaded once
//!   from JSON ([`model::Catalog`]). Products reference owners and
//!   categories by name only.
//! - **Filter State**: The active owner, search text and set of selected
//!   categories ([`filter::FilterState`]). All three constraints combine
//!   with AND.
//! - **Sort State**: An optional column plus a direction cycled by
//!   repeated activation ([`sort::SortState`]).
//! - **Session**: The single owner of filter and sort state that derives
//!   the visible, ordered product list ([`session::Session`]).
//! - **Listing**: The display-ready result: resolved category labels,
//!   owner styles, or the "no matching products" notice
//!   ([`display::Listing`]).
//!
//! ## Main Modules
//!
//! - [`model`]: Catalog entities and lookups.
//! - [`filter`]: Predicate evaluation over products.
//! - [`sort`]: Column comparators, the direction cycle and collation.
//! - [`session`]: Interaction operations and visible-list derivation.
//! - [`display`]: Labels, icons and owner styles for presentation.
//! - [`reports`]: Non-interactive listings as table, JSON or CSV.
//! - [`config`]: YAML configuration discovery, merging and validation.
//! - [`tui`]: The interactive ratatui browser.
//! - [`cli`]: Command handlers used by the binary.
//!
//! ## Getting Started
//!
//! Here's a quick example of narrowing the built-in catalog:
//!
//! ```no_run
//! use product_categories::{Catalog, Session, SortColumn};
//!
//! let mut session = Session::new(Catalog::builtin()?);
//! session.toggle_user_filter(Some("Roma"));
//! session.toggle_category_filter("Drinks");
//! session.toggle_sort(SortColumn::Name);
//!
//! for row in session.listing().rows() {
//!     println!("{} {} {}", row.id, row.name, row.category);
//! }
//! # Ok::<(), product_categories::CatalogError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `product-categories`
//! binary exposes `browse` (interactive) and `list` (scriptable) commands;
//! see the README for usage.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // TUI layout math converts between usize and u16
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::unused_self
)]

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod model;
pub mod reports;
pub mod session;
pub mod sort;
pub mod tui;

pub use config::{AppConfig, ConfigError, TuiConfig, Validatable};
pub use display::{Listing, ProductRow};
pub use error::{CatalogError, ErrorContext, Result};
pub use filter::FilterState;
pub use model::{Catalog, Category, Gender, Product, User};
pub use reports::{ReportFormat, ReportGenerator};
pub use session::Session;
pub use sort::{SortColumn, SortDirection, SortState};
pub use tui::RowSelection;
