//! List command handler.
//!
//! Implements the `list` subcommand: the same session actions the TUI
//! offers, applied once from the command line.

use super::exit_codes;
use crate::config::{ListConfig, ListQuery, ListingConfig};
use crate::model::Catalog;
use crate::reports::{
    OutputTarget, ReportContext, ReportFormat, create_reporter_with_options, should_use_color,
    write_output,
};
use crate::session::Session;
use crate::sort::SortDirection;
use anyhow::{Context, Result};

/// Run the list command
#[allow(clippy::needless_pass_by_value)]
pub fn run_list(config: ListConfig) -> Result<i32> {
    let catalog = Catalog::load_or_builtin(config.catalog_path.as_deref())
        .context("failed to load catalog")?;
    let session = build_session(catalog, &config.listing, &config.query);

    let target = OutputTarget::from_option(config.output_file.clone());
    let use_color = should_use_color(config.output.no_color) && target.is_terminal();
    let content = render_listing(&session, config.output.format, use_color)?;
    write_output(&content, &target)?;

    if session.listing().has_matches() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::NO_MATCHES)
    }
}

/// Start a session and replay the command-line actions on it.
///
/// Actions go through the same toggles as the TUI: the initial sort is
/// one toggle for ascending and two for descending.
pub fn build_session(catalog: Catalog, listing: &ListingConfig, query: &ListQuery) -> Session {
    let mut session = Session::new(catalog);

    if let Some(ref user) = query.user {
        if !session.catalog().has_user(user) {
            tracing::warn!("Unknown user '{user}'; showing all users");
        }
        session.toggle_user_filter(Some(user));
    }

    if let Some(ref search) = query.search {
        session.set_search_text(search.as_str());
    }

    for category in &query.categories {
        if !session.catalog().has_category(category) {
            tracing::warn!("Unknown category '{category}' ignored");
            continue;
        }
        // Repeating a category on the command line should not toggle it off
        if !session.filter().is_category_selected(category) {
            session.toggle_category_filter(category);
        }
    }

    let sort = listing.sort_state();
    if let Some(column) = sort.active_column() {
        session.toggle_sort(column);
        if sort.direction == SortDirection::Descending {
            session.toggle_sort(column);
        }
    }

    session
}

/// Render the session's listing in `format`.
pub fn render_listing(session: &Session, format: ReportFormat, use_color: bool) -> Result<String> {
    let format = match format {
        ReportFormat::Auto | ReportFormat::Tui => ReportFormat::Table,
        other => other,
    };
    let reporter = create_reporter_with_options(format, use_color);
    let content = reporter
        .generate_listing_report(&session.listing(), &ReportContext::from_session(session))
        .with_context(|| format!("failed to render {format} listing"))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::sort::SortColumn;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_build_session_applies_query() {
        let query = ListQuery {
            user: Some("Roma".to_string()),
            search: Some("e".to_string()),
            categories: vec!["Drinks".to_string(), "Drinks".to_string()],
        };
        let listing = ListingConfig {
            sort_column: Some(SortColumn::Name),
            sort_descending: true,
        };
        let session = build_session(builtin(), &listing, &query);

        let names: Vec<&str> = session
            .visible_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Tea", "Juice", "Coffee", "Beer"]);
        assert_eq!(session.sort().direction, SortDirection::Descending);
    }

    #[test]
    fn test_unknown_category_ignored() {
        let query = ListQuery {
            categories: vec!["Toys".to_string()],
            ..ListQuery::default()
        };
        let session = build_session(builtin(), &ListingConfig::default(), &query);
        assert!(session.all_categories_active());
        assert_eq!(session.visible_products().len(), 15);
    }

    #[test]
    fn test_run_list_exit_codes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("listing.json");

        let mut config = ListConfig {
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
            },
            output_file: Some(out.clone()),
            ..ListConfig::default()
        };
        assert_eq!(run_list(config.clone()).unwrap(), exit_codes::SUCCESS);

        config.query.search = Some("zzz".to_string());
        assert_eq!(run_list(config).unwrap(), exit_codes::NO_MATCHES);
        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.contains("\"matching\": false"));
    }

    #[test]
    fn test_run_list_missing_catalog_is_error() {
        let config = ListConfig {
            catalog_path: Some("/nonexistent/catalog.json".into()),
            ..ListConfig::default()
        };
        assert!(run_list(config).is_err());
    }
}
