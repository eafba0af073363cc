use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use aiportfolio::analytics::{FilterCriteria, Sort, SortKey, SortOrder};
use aiportfolio::catalog::Catalog;
use aiportfolio::cli::{self, OutputFormat};
use aiportfolio::view::ViewContext;
use aiportfolio::web::{self, AppState};
use aiportfolio::{config, logging};

#[derive(Debug, Parser)]
#[command(name = "aiportfolio")]
#[command(about = "AI governance dashboard for a bank's use-case portfolio")]
struct App {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Portfolio totals and per-department breakdown
    Summary {
        /// Output format: table (default), json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List use cases, optionally filtered and sorted
    List {
        /// Case-insensitive substring match on the use-case name
        #[arg(long, short)]
        search: Option<String>,
        /// active | training | pending
        #[arg(long)]
        status: Option<String>,
        /// AI type id
        #[arg(long)]
        ai_type: Option<String>,
        /// Data layer id
        #[arg(long)]
        data_layer: Option<String>,
        /// Department id
        #[arg(long)]
        department: Option<String>,
        /// name | accuracy | cost_savings | revenue
        #[arg(long, default_value = "name")]
        sort: String,
        /// asc | desc
        #[arg(long, default_value = "asc")]
        order: String,
        /// Output format: table (default), json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show one tab of a department page
    Department {
        id: String,
        /// overview | use-cases | performance | financials
        #[arg(long)]
        tab: Option<String>,
        /// Output format: table (default), json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show one tab of a use-case page
    UseCase {
        id: String,
        /// overview | performance | impact
        #[arg(long)]
        tab: Option<String>,
        /// Output format: table (default), json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// AI type and data layer tables
    Categories {
        /// Output format: table (default), json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Load and validate a catalog file (default: the configured catalog)
    Validate { path: Option<PathBuf> },
    /// Start the web dashboard
    Serve {
        /// Listen address (overrides config)
        #[arg(long)]
        addr: Option<String>,
        /// Do not open a browser
        #[arg(long)]
        no_open: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config to ~/.aiportfolio/config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Set a dotted key, e.g. `display.top_n 20`
    Set { key: String, value: String },
    /// Reset the global config to defaults
    Reset,
}

fn main() -> Result<()> {
    let app = App::parse();
    let loaded = config::load_layered();
    logging::init(&loaded.config.logging, app.verbose);
    loaded.log_warnings();
    let cfg = loaded.config;

    // Commands that do not need a catalog
    match &app.command {
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show => cli::run_config_show(),
                ConfigAction::Init { force } => cli::run_config_init(*force),
                ConfigAction::Set { key, value } => cli::run_config_set(key, value),
                ConfigAction::Reset => cli::run_config_reset(),
            };
        }
        Commands::Validate { path } => {
            let path = path.clone().or_else(|| cfg.catalog.resolved_path());
            return cli::run_validate(path.as_deref());
        }
        _ => {}
    }

    let catalog = Catalog::load(cfg.catalog.resolved_path().as_deref())
        .context("failed to load catalog")?;
    let ctx = ViewContext::from_config(&catalog, &cfg);

    match app.command {
        Commands::Summary { format } => {
            cli::run_summary(&ctx, OutputFormat::from_str_opt(Some(&format)))
        }
        Commands::List {
            search,
            status,
            ai_type,
            data_layer,
            department,
            sort,
            order,
            format,
        } => {
            let criteria = FilterCriteria::from_options(
                search.as_deref(),
                status.as_deref(),
                ai_type.as_deref(),
                data_layer.as_deref(),
                department.as_deref(),
            )?;
            let sort = Sort {
                key: SortKey::parse(&sort)?,
                order: SortOrder::parse(&order)?,
            };
            cli::run_list(&ctx, &criteria, sort, OutputFormat::from_str_opt(Some(&format)))
        }
        Commands::Department { id, tab, format } => cli::run_department(
            &ctx,
            &id,
            tab.as_deref(),
            OutputFormat::from_str_opt(Some(&format)),
        ),
        Commands::UseCase { id, tab, format } => cli::run_use_case(
            &ctx,
            &id,
            tab.as_deref(),
            OutputFormat::from_str_opt(Some(&format)),
        ),
        Commands::Categories { format } => {
            cli::run_categories(&catalog, OutputFormat::from_str_opt(Some(&format)))
        }
        Commands::Serve { addr, no_open } => {
            let addr = addr.unwrap_or_else(|| cfg.server.addr.clone());
            let open = cfg.server.open_browser && !no_open;
            let state = AppState::new(catalog, cfg);
            web::serve(&addr, &state, open)
        }
        Commands::Config { .. } | Commands::Validate { .. } => Ok(()),
    }
}
