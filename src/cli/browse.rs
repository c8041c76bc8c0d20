//! Browse command handler.
//!
//! Implements the `browse` subcommand: the interactive TUI.

use super::exit_codes;
use crate::config::{BrowseConfig, TuiPreferences};
use crate::model::Catalog;
use crate::session::Session;
use crate::tui::{App, Theme, run_tui, set_theme};
use anyhow::{Context, Result};

/// Run the browse command
#[allow(clippy::needless_pass_by_value)]
pub fn run_browse(config: BrowseConfig) -> Result<i32> {
    let catalog = Catalog::load_or_builtin(config.catalog_path.as_deref())
        .context("failed to load catalog")?;

    // A theme saved with `T` wins over the config file
    let saved = TuiPreferences::config_path()
        .filter(|path| path.exists())
        .map(|_| TuiPreferences::load());
    let theme = saved.map_or_else(|| config.tui.theme.clone(), |prefs| prefs.theme);
    set_theme(Theme::from_name(&theme));

    let mut app = App::new(Session::new(catalog), &config.tui);
    run_tui(&mut app).context("terminal UI failed")?;

    Ok(exit_codes::SUCCESS)
}
