//! Config file discovery, merging and validation from the outside.

use product_categories::config::{
    AppConfig, BrowseConfig, ListConfig, TuiConfig, Validatable, generate_json_schema,
    load_config_file, load_or_default,
};
use product_categories::reports::ReportFormat;
use product_categories::sort::SortColumn;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn explicit_config_is_loaded() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        "listing:\n  sort_column: user\n  sort_descending: true\noutput:\n  format: csv\n",
    );

    let (config, loaded_from) = load_or_default(Some(&path));
    assert_eq!(loaded_from, Some(path));
    assert_eq!(config.listing.sort_column, Some(SortColumn::User));
    assert!(config.listing.sort_descending);
    assert_eq!(config.output.format, ReportFormat::Csv);
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "tui: [not, a, mapping]\n");

    assert!(load_config_file(&path).is_err());
    let (config, loaded_from) = load_or_default(Some(&path));
    assert_eq!(loaded_from, None);
    assert_eq!(config, AppConfig::default());
}

#[test]
fn cli_overrides_win_over_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        "output:\n  format: csv\ntui:\n  theme: light\n  tick_rate_ms: 100\n",
    );

    let overrides = AppConfig::builder()
        .output_format(ReportFormat::Json)
        .sort(Some(SortColumn::Name), false)
        .build();
    let (config, _) = AppConfig::from_file_with_overrides(Some(&path), &overrides);

    assert_eq!(config.output.format, ReportFormat::Json);
    assert_eq!(config.listing.sort_column, Some(SortColumn::Name));
    // Untouched by the overrides
    assert_eq!(config.tui.theme, "light");
    assert_eq!(config.tui.tick_rate_ms, 100);
}

#[test]
fn explicit_dark_theme_overrides_file_theme() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "tui:\n  theme: light\n");
    let overrides = AppConfig::builder().build();

    let (config, _) = AppConfig::from_file_with_overrides(Some(&path), &overrides);
    assert_eq!(config.tui.theme, "light");

    let kept = config.clone().with_theme_override(None);
    assert_eq!(kept.tui.theme, "light");

    let dark = config.with_theme_override(Some("dark".to_string()));
    assert_eq!(dark.tui.theme, "dark");
}

#[test]
fn validation_reports_every_problem() {
    let config = BrowseConfig {
        catalog_path: Some(PathBuf::from("/definitely/not/here.json")),
        tui: TuiConfig {
            theme: "sepia".to_string(),
            mouse_enabled: true,
            tick_rate_ms: 1,
        },
    };
    let errors = config.validate();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["catalog.path", "tui.theme", "tui.tick_rate_ms"]);
    assert!(!config.is_valid());
}

#[test]
fn list_config_rejects_tui_format() {
    let mut config = ListConfig::default();
    assert!(config.is_valid());

    config.output.format = ReportFormat::Tui;
    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().starts_with("output.format: "));
}

#[test]
fn schema_lists_sections() {
    let schema = generate_json_schema().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
    let properties = value["properties"].as_object().unwrap();
    for section in ["catalog", "output", "listing", "tui"] {
        assert!(properties.contains_key(section), "missing {section}");
    }
}
