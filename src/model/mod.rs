//! Static catalog data: users, categories and products.
//!
//! The three collections are loaded once at startup and never mutated.
//! Products reference their owner and category by name, without
//! referential integrity; [`Catalog`] lookups for display metadata return
//! `None` for dangling references instead of failing.
//!
//! ```ignore
//! let catalog = Catalog::builtin()?;
//! let icon = catalog.category_icon("Grocery"); // Some("🍞")
//! ```

mod catalog;
mod entities;

pub use catalog::*;
pub use entities::*;
