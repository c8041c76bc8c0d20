//! Named constants for TUI layout and navigation.

/// Number of rows to move per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Users and categories reachable by a number or function key.
pub(crate) const MAX_SHORTCUT_ITEMS: usize = 9;

/// Minimum terminal width for the browse layout.
pub const MIN_WIDTH: u16 = 60;

/// Minimum terminal height for the browse layout.
pub const MIN_HEIGHT: u16 = 16;
