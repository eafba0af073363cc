//! CLI command implementations for aiportfolio.
//!
//! Provides subcommand handlers for:
//! - `aiportfolio summary`: portfolio totals and per-department breakdown
//! - `aiportfolio list`: filtered, sorted use-case listing
//! - `aiportfolio department <id>` / `use-case <id>`: one page of the dashboard
//! - `aiportfolio categories`: AI type and data layer tables
//! - `aiportfolio validate`: load and validate a catalog file
//! - `aiportfolio config show|init|set|reset`: configuration management

pub mod render;

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::analytics::{
    FilterCriteria, PortfolioSummary, Sort, Summary, portfolio_summary, summarize,
};
use crate::catalog::{Catalog, CategoryKind, CategoryTable};
use crate::config;
use crate::error::{EntityKind, ViewError};
use crate::view::{
    self, Table, View, ViewContext, format_pct, format_roi, use_case_listing,
};

use render::{print_table, print_view, table_csv, view_csv};

/// Output format for analytics commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_str_opt(s: Option<&str>) -> Self {
        match s {
            Some("json") => Self::Json,
            Some("csv") => Self::Csv,
            _ => Self::Table,
        }
    }
}

// ---------------------------------------------------------------------------
// aiportfolio summary
// ---------------------------------------------------------------------------

/// Show portfolio totals and the per-department breakdown.
pub fn run_summary(ctx: &ViewContext<'_>, format: OutputFormat) -> Result<()> {
    let portfolio = portfolio_summary(ctx.catalog);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&portfolio)?),
        OutputFormat::Csv => print!("{}", table_csv(&department_table(ctx, &portfolio))),
        OutputFormat::Table => print_summary_table(ctx, &portfolio),
    }

    Ok(())
}

fn print_summary_table(ctx: &ViewContext<'_>, portfolio: &PortfolioSummary) {
    let total = &portfolio.total;

    println!("{}", "AI Portfolio Summary".bold().cyan());
    println!("{}", "=".repeat(60));
    println!();

    println!("  {} {}", "Use cases:      ".bold(), total.total);
    println!(
        "  {} Active: {} ({:.0}%)  Training: {} ({:.0}%)  Pending: {} ({:.0}%)",
        "Status:         ".bold(),
        total.by_status.active,
        total.by_status.pct(total.by_status.active),
        total.by_status.training,
        total.by_status.pct(total.by_status.training),
        total.by_status.pending,
        total.by_status.pct(total.by_status.pending),
    );
    println!(
        "  {} {}",
        "Models deployed:".bold(),
        format_number(total.total_models)
    );
    println!(
        "  {} {}",
        "Cost savings:   ".bold(),
        ctx.money(total.total_cost_savings)
    );
    println!(
        "  {} {}",
        "Revenue:        ".bold(),
        ctx.money(total.total_revenue)
    );
    println!(
        "  {} {}  (ROI {})",
        "Investment:     ".bold(),
        ctx.money(total.total_investment),
        format_roi(total.roi_pct, total.total_investment),
    );
    println!(
        "  {} {}",
        "Avg accuracy:   ".bold(),
        format_pct(total.avg_accuracy)
    );
    println!(
        "  {} {}",
        "Avg productivity:".bold(),
        format_pct(total.avg_productivity)
    );
    println!();

    print_table(&department_table(ctx, portfolio));
}

fn department_table(ctx: &ViewContext<'_>, portfolio: &PortfolioSummary) -> Table {
    let rows = portfolio
        .departments
        .iter()
        .map(|d| {
            let s = &d.summary;
            vec![
                d.id.clone(),
                d.name.clone(),
                s.total.to_string(),
                s.by_status.active.to_string(),
                ctx.money(s.total_cost_savings),
                ctx.money(s.total_revenue),
                format_pct(s.avg_accuracy),
            ]
        })
        .collect();

    Table::new(
        "Departments",
        &[
            "Id",
            "Department",
            "Use Cases",
            "Active",
            "Cost Savings",
            "Revenue",
            "Avg Accuracy",
        ],
        rows,
    )
    .when_empty("The catalog has no departments.")
}

// ---------------------------------------------------------------------------
// aiportfolio list
// ---------------------------------------------------------------------------

/// List use cases matching `criteria`, sorted by `sort`.
pub fn run_list(
    ctx: &ViewContext<'_>,
    criteria: &FilterCriteria,
    sort: Sort,
    format: OutputFormat,
) -> Result<()> {
    let listing = use_case_listing(ctx, criteria, sort);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        OutputFormat::Csv => print!("{}", table_csv(&listing.table(ctx))),
        OutputFormat::Table => {
            let mut table = listing.table(ctx);
            let hidden = table.rows.len().saturating_sub(ctx.top_n);
            table.rows.truncate(ctx.top_n);
            print_table(&table);

            if hidden > 0 {
                println!(
                    "  {}",
                    format!("... and {hidden} more (use --format csv for all rows)").dimmed()
                );
            }
            if !listing.is_empty() {
                println!();
                print_subset_summary(ctx, &listing.summary);
            }
        }
    }

    Ok(())
}

fn print_subset_summary(ctx: &ViewContext<'_>, summary: &Summary) {
    println!(
        "  {} savings {}  revenue {}  avg accuracy {}",
        "Matching:".bold(),
        ctx.money(summary.total_cost_savings),
        ctx.money(summary.total_revenue),
        format_pct(summary.avg_accuracy),
    );
}

// ---------------------------------------------------------------------------
// aiportfolio department / use-case
// ---------------------------------------------------------------------------

/// Show one tab of a department page.
pub fn run_department(
    ctx: &ViewContext<'_>,
    id: &str,
    tab: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    show_view(view::department_view(ctx, id, tab), format)
}

/// Show one tab of a use-case page.
pub fn run_use_case(
    ctx: &ViewContext<'_>,
    id: &str,
    tab: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    show_view(view::use_case_view(ctx, id, tab), format)
}

fn show_view(result: Result<View, ViewError>, format: OutputFormat) -> Result<()> {
    let view = match result {
        Ok(view) => view,
        Err(e) => {
            print_not_found(&e);
            return Err(e.into());
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Csv => print!("{}", view_csv(&view)),
        OutputFormat::Table => print_view(&view),
    }
    Ok(())
}

fn print_not_found(err: &ViewError) {
    let ViewError::NotFound { kind, .. } = err;
    let hint = match kind {
        EntityKind::Department => "Run `aiportfolio summary` to see department ids.",
        EntityKind::UseCase => "Run `aiportfolio list` to see use-case ids.",
        EntityKind::Tab => "Omit --tab to open the first tab.",
    };
    eprintln!("{} {}", "✗".red().bold(), err);
    eprintln!("  {}", hint.dimmed());
}

// ---------------------------------------------------------------------------
// aiportfolio categories
// ---------------------------------------------------------------------------

/// Show both category tables with use-case counts.
pub fn run_categories(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let summary = summarize(catalog.entries().map(|e| e.use_case));
    let ai_types = category_table(catalog.ai_types(), &summary);
    let data_layers = category_table(catalog.data_layers(), &summary);

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "ai_types": catalog.ai_types().iter().collect::<Vec<_>>(),
                "data_layers": catalog.data_layers().iter().collect::<Vec<_>>(),
                "by_ai_type": summary.by_ai_type,
                "by_data_layer": summary.by_data_layer,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Csv => {
            print!("{}", table_csv(&ai_types));
            println!();
            print!("{}", table_csv(&data_layers));
        }
        OutputFormat::Table => {
            print_table(&ai_types);
            println!();
            print_table(&data_layers);
        }
    }

    Ok(())
}

fn category_table(table: &CategoryTable, summary: &Summary) -> Table {
    let counts = match table.kind() {
        CategoryKind::AiType => &summary.by_ai_type,
        CategoryKind::DataLayer => &summary.by_data_layer,
    };
    let rows = table
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.name.clone(),
                c.color.clone(),
                counts.get(&c.id).copied().unwrap_or(0).to_string(),
            ]
        })
        .collect();
    let (title, empty) = match table.kind() {
        CategoryKind::AiType => ("AI Types", "No AI types are defined."),
        CategoryKind::DataLayer => ("Data Layers", "No data layers are defined."),
    };
    Table::new(title, &["Id", "Name", "Color", "Use Cases"], rows).when_empty(empty)
}

// ---------------------------------------------------------------------------
// aiportfolio validate
// ---------------------------------------------------------------------------

/// Load and validate a catalog; `None` checks the built-in one.
pub fn run_validate(path: Option<&Path>) -> Result<()> {
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in catalog".to_string());

    match Catalog::load(path) {
        Ok(catalog) => {
            println!("{} {} is valid", "✓".green().bold(), source);
            println!(
                "  {} departments, {} use cases, {} AI types, {} data layers",
                catalog.departments().len(),
                catalog.use_case_count(),
                catalog.ai_types().len(),
                catalog.data_layers().len(),
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {} is invalid", "✗".red().bold(), source);
            eprintln!("  {}", e.to_string().red());
            Err(e.into())
        }
    }
}

// ---------------------------------------------------------------------------
// aiportfolio config show | init | set | reset
// ---------------------------------------------------------------------------

/// Show the effective (merged) configuration as TOML.
pub fn run_config_show() -> Result<()> {
    let toml_str = config::show_effective_config()?;
    println!("{}", "Effective aiportfolio Configuration".bold().cyan());
    println!("{}", "=".repeat(50));
    println!();
    println!("{toml_str}");

    let global_exists = config::global_config_file()
        .map(|p| p.exists())
        .unwrap_or(false);
    let project_exists = config::project_config_file()
        .map(|p| p.exists())
        .unwrap_or(false);
    println!("{}", "Sources (highest priority last):".dimmed());
    println!("  {} built-in defaults", "·".dimmed());
    print_source(global_exists, "~/.aiportfolio/config.toml");
    print_source(project_exists, ".aiportfolio.toml");
    println!(
        "  {} {}",
        "·".dimmed(),
        "AIPORTFOLIO_* environment variables".dimmed()
    );

    Ok(())
}

fn print_source(exists: bool, name: &str) {
    if exists {
        println!("  {} {}", "✓".green(), name.dimmed());
    } else {
        println!("  {} {}", "·".dimmed(), format!("{name} (not found)").dimmed());
    }
}

/// Initialize a default config file at `~/.aiportfolio/config.toml`.
pub fn run_config_init(force: bool) -> Result<()> {
    let path = config::init_config(force)?;
    println!(
        "{} Config written to {}",
        "✓".green().bold(),
        path.display()
    );
    println!("  {}", "Edit the file to customize the dashboard.".dimmed());
    Ok(())
}

/// Set a single configuration value in the global config file.
pub fn run_config_set(key: &str, value: &str) -> Result<()> {
    config::set_config_value(key, value)?;
    println!("{} Set {} = {}", "✓".green().bold(), key.bold(), value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn run_config_reset() -> Result<()> {
    let path = config::reset_config()?;
    println!(
        "{} Config reset to defaults at {}",
        "✓".green().bold(),
        path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Format a number with comma separators for readability.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Filler;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str_opt(None), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str_opt(Some("json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_opt(Some("csv")), OutputFormat::Csv);
        assert_eq!(
            OutputFormat::from_str_opt(Some("unknown")),
            OutputFormat::Table
        );
    }

    #[test]
    fn department_table_has_row_per_department() {
        let catalog = Catalog::builtin().unwrap();
        let ctx = ViewContext::new(&catalog, Filler::new(42));
        let portfolio = portfolio_summary(&catalog);
        let table = department_table(&ctx, &portfolio);
        assert_eq!(table.rows.len(), catalog.departments().len());
        assert_eq!(table.rows[0][0], catalog.departments()[0].id);
    }

    #[test]
    fn category_counts_cover_every_use_case() {
        let catalog = Catalog::builtin().unwrap();
        let summary = summarize(catalog.entries().map(|e| e.use_case));
        let table = category_table(catalog.ai_types(), &summary);
        let counted: usize = table.rows.iter().map(|r| r[3].parse::<usize>().unwrap()).sum();
        assert_eq!(counted, catalog.use_case_count());
    }

    #[test]
    fn unknown_use_case_is_an_error() {
        let catalog = Catalog::builtin().unwrap();
        let ctx = ViewContext::new(&catalog, Filler::new(42));
        let err = run_use_case(&ctx, "does-not-exist", None, OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn validate_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_validate(Some(&dir.path().join("missing.toml"))).is_err());
        assert!(run_validate(None).is_ok());
    }
}
