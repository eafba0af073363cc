use crate::analytics::aggregate::{PortfolioSummary, Summary, portfolio_summary, ratio_pct};
use crate::analytics::series;
use crate::catalog::{CategoryKind, UseCase};
use crate::error::ViewError;

use super::{
    Chart, ChartKind, Page, PortfolioTab, StatCard, Tab, Table, View, ViewContext, Widget,
    department_link, format_pct, format_roi, use_case_link,
};

/// Resolve the portfolio (home) page.
pub fn portfolio_view(ctx: &ViewContext<'_>, tab: Option<&str>) -> Result<View, ViewError> {
    let tab = PortfolioTab::resolve(tab)?;
    let portfolio = portfolio_summary(ctx.catalog);

    let widgets = match tab {
        PortfolioTab::Overview => overview(ctx, &portfolio),
        PortfolioTab::Departments => departments(ctx, &portfolio),
        PortfolioTab::Categories => categories(ctx, &portfolio.total),
        PortfolioTab::Performance => performance(ctx),
    };

    Ok(View {
        page: Page::Portfolio,
        entity: None,
        parent: None,
        title: "AI Portfolio".to_string(),
        tab: tab.id(),
        tabs: PortfolioTab::refs(),
        widgets,
    })
}

fn overview(ctx: &ViewContext<'_>, portfolio: &PortfolioSummary) -> Vec<Widget> {
    let total = &portfolio.total;
    vec![
        Widget::Stats {
            cards: vec![
                StatCard::new("Use Cases", total.total.to_string())
                    .hint(format!("{} departments", portfolio.departments.len())),
                StatCard::new("Active", total.by_status.active.to_string()).hint(format!(
                    "{:.0}% of portfolio",
                    total.by_status.pct(total.by_status.active)
                )),
                StatCard::new("Cost Savings", ctx.money(total.total_cost_savings)),
                StatCard::new("Revenue", ctx.money(total.total_revenue)),
                StatCard::new("Avg Accuracy", format_pct(total.avg_accuracy)),
                StatCard::new("ROI", format_roi(total.roi_pct, total.total_investment)),
            ],
        },
        Widget::Chart(Chart::new(
            ChartKind::Pie,
            "Use Cases by Status",
            series::status_distribution(total),
        )),
        Widget::Chart(Chart::new(
            ChartKind::Line,
            "Active Use Cases (trailing 12 months)",
            ctx.filler
                .monthly_trend("portfolio", total.by_status.active as f64),
        )),
    ]
}

fn departments(ctx: &ViewContext<'_>, portfolio: &PortfolioSummary) -> Vec<Widget> {
    let rows = portfolio
        .departments
        .iter()
        .map(|d| {
            vec![
                d.name.clone(),
                d.summary.total.to_string(),
                d.summary.by_status.active.to_string(),
                ctx.money(d.summary.total_cost_savings),
                ctx.money(d.summary.total_revenue),
                format_pct(d.summary.avg_accuracy),
            ]
        })
        .collect();
    let links = portfolio
        .departments
        .iter()
        .map(|d| department_link(&d.id))
        .collect();

    vec![
        Widget::Chart(Chart::new(
            ChartKind::Bar,
            "Cost Savings by Department ($M)",
            series::by_department(portfolio, |s| s.total_cost_savings),
        )),
        Widget::Chart(Chart::new(
            ChartKind::Bar,
            "Revenue by Department ($M)",
            series::by_department(portfolio, |s| s.total_revenue),
        )),
        Widget::Table(
            Table::new(
                "Departments",
                &["Department", "Use Cases", "Active", "Cost Savings", "Revenue", "Avg Accuracy"],
                rows,
            )
            .when_empty("The catalog has no departments.")
            .with_links(links),
        ),
    ]
}

fn categories(ctx: &ViewContext<'_>, total: &Summary) -> Vec<Widget> {
    let ai_types = ctx.catalog.categories(CategoryKind::AiType);
    let rows = ai_types
        .iter()
        .map(|c| {
            let count = total.by_ai_type.get(&c.id).copied().unwrap_or(0);
            vec![
                c.name.clone(),
                count.to_string(),
                format!("{:.0}%", ratio_pct(count as f64, total.total as f64)),
            ]
        })
        .collect();

    vec![
        Widget::Chart(Chart::new(
            ChartKind::Bar,
            "Use Cases by AI Type",
            series::category_distribution(&total.by_ai_type, ai_types),
        )),
        Widget::Chart(Chart::new(
            ChartKind::Pie,
            "Use Cases by Data Layer",
            series::category_distribution(
                &total.by_data_layer,
                ctx.catalog.categories(CategoryKind::DataLayer),
            ),
        )),
        Widget::Table(
            Table::new("AI Types", &["AI Type", "Use Cases", "Share"], rows)
                .when_empty("No AI types are defined."),
        ),
    ]
}

fn performance(ctx: &ViewContext<'_>) -> Vec<Widget> {
    let all: Vec<&UseCase> = ctx.catalog.entries().map(|e| e.use_case).collect();

    let mut ranked: Vec<_> = ctx
        .catalog
        .entries()
        .filter(|e| e.use_case.accuracy > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.use_case.accuracy.total_cmp(&a.use_case.accuracy));
    ranked.truncate(ctx.top_n);

    let rows = ranked
        .iter()
        .map(|e| {
            vec![
                e.use_case.name.clone(),
                e.department.name.clone(),
                format_pct(e.use_case.accuracy),
                ctx.money(e.use_case.cost_savings),
            ]
        })
        .collect();
    let links = ranked.iter().map(|e| use_case_link(&e.use_case.id)).collect();

    vec![
        Widget::Chart(Chart::new(
            ChartKind::Scatter,
            "Accuracy vs Cost Savings",
            series::accuracy_vs_savings(all.iter().copied()),
        )),
        Widget::Chart(Chart::new(
            ChartKind::Radar,
            "Portfolio Capability",
            series::capability_radar(all.iter().copied()),
        )),
        Widget::Table(
            Table::new(
                "Top Use Cases by Accuracy",
                &["Use Case", "Department", "Accuracy", "Cost Savings"],
                rows,
            )
            .when_empty("No use cases report accuracy.")
            .with_links(links),
        ),
    ]
}
