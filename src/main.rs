//! product-categories: filterable, sortable product catalog browser
//!
//! Browse the catalog interactively, or print a filtered listing for scripts.

#![allow(clippy::too_many_lines, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use product_categories::{
    cli::{self, exit_codes},
    config::{
        AppConfig, BrowseConfig, ListConfig, ListQuery, Validatable,
        file::{CONFIG_FILE_NAMES, config_search_dirs},
    },
    reports::{OutputTarget, ReportFormat, auto_detect_format},
    sort::SortColumn,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "product-categories")]
#[command(version)]
#[command(about = "Filterable, sortable product catalog browser", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Products listed (or the browser exited normally)
    1  No products matching criteria
    2  Error occurred

EXAMPLES:
    # Interactive browser
    product-categories browse

    # Roma's drinks containing an 'e', newest names first
    product-categories list --user Roma --category Drinks --search e --sort name --desc

    # Export every product as CSV
    product-categories list -o csv -O products.csv")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Defaults to `browse` on a terminal and `list` otherwise
    #[command(subcommand)]
    command: Option<Commands>,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `browse` subcommand
#[derive(Parser, Default)]
struct BrowseArgs {
    /// Catalog JSON file (built-in catalog if not specified)
    #[arg(long, env = "PRODUCT_CATEGORIES_CATALOG")]
    catalog: Option<PathBuf>,

    /// Color theme: dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

/// Arguments for the `list` subcommand
#[derive(Parser, Default)]
struct ListArgs {
    /// Catalog JSON file (built-in catalog if not specified)
    #[arg(long, env = "PRODUCT_CATEGORIES_CATALOG")]
    catalog: Option<PathBuf>,

    /// Only show products owned by this user
    #[arg(long)]
    user: Option<String>,

    /// Case-insensitive substring of the product name
    #[arg(short, long)]
    search: Option<String>,

    /// Only show products in this category (repeatable)
    #[arg(short, long = "category")]
    categories: Vec<String>,

    /// Sort by column
    #[arg(long, value_enum)]
    sort: Option<SortColumn>,

    /// Sort descending (requires --sort)
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog in an interactive terminal UI
    Browse(BrowseArgs),

    /// Print the filtered, sorted product listing
    List(ListArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON Schema for the configuration file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// List config file search paths
    Path,
    /// Write a commented example config to the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // The browser owns the terminal, so only warnings reach stderr there
    let browsing = matches!(cli.command, Some(Commands::Browse(_)) | None)
        && auto_detect_format(ReportFormat::Auto, &OutputTarget::Stdout) == ReportFormat::Tui;
    let log_level = if cli.verbose {
        "debug"
    } else if browsing {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let command = cli.command.unwrap_or_else(|| {
        if auto_detect_format(ReportFormat::Auto, &OutputTarget::Stdout) == ReportFormat::Tui {
            Commands::Browse(BrowseArgs::default())
        } else {
            Commands::List(ListArgs::default())
        }
    });

    match command {
        Commands::Browse(args) => {
            let mut overrides = AppConfig::builder()
                .catalog_path(args.catalog)
                .no_color(cli.no_color)
                .build();
            overrides.tui.mouse_enabled = !args.no_mouse;

            let (app_config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            let app_config = app_config.with_theme_override(args.theme);
            let config = BrowseConfig {
                catalog_path: app_config.catalog.path,
                tui: app_config.tui,
            };
            ensure_valid(&config)?;
            cli::run_browse(config)
        }

        Commands::List(args) => {
            let overrides = AppConfig::builder()
                .catalog_path(args.catalog)
                .output_format(args.output)
                .no_color(cli.no_color)
                .sort(args.sort, args.desc)
                .build();

            let (app_config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            let config = ListConfig {
                catalog_path: app_config.catalog.path,
                output: app_config.output,
                output_file: args.output_file,
                listing: app_config.listing,
                query: ListQuery {
                    user: args.user,
                    search: args.search,
                    categories: args.categories,
                },
            };
            ensure_valid(&config)?;
            cli::run_list(config)
        }

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "product-categories",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = product_categories::config::generate_json_schema()
                .context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    product_categories::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match product_categories::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(CONFIG_FILE_NAMES[0]);
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = product_categories::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Log every validation problem, then fail if there were any.
fn ensure_valid(config: &impl Validatable) -> Result<()> {
    let errors = config.validate();
    for error in &errors {
        tracing::error!("invalid configuration: {error}");
    }
    if !errors.is_empty() {
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }
    Ok(())
}
