use crate::analytics::aggregate::{Summary, summarize};
use crate::analytics::filter::{FilterCriteria, Selection, filter_use_cases};
use crate::analytics::series;
use crate::catalog::{Department, Status};
use crate::error::{EntityKind, ViewError};

use super::{
    Chart, ChartKind, DepartmentTab, EntityRef, Page, StatCard, Tab, Table, View, ViewContext,
    Widget, format_pct, format_roi, use_case_link,
};

const NO_USE_CASES: &str = "This department has no use cases.";

/// Resolve a department page. Unknown department or tab ids are `NotFound`.
pub fn department_view(
    ctx: &ViewContext<'_>,
    department_id: &str,
    tab: Option<&str>,
) -> Result<View, ViewError> {
    let department = ctx
        .catalog
        .department(department_id)
        .ok_or_else(|| ViewError::not_found(EntityKind::Department, department_id))?;
    let tab = DepartmentTab::resolve(tab)?;
    let summary = summarize(&department.use_cases);

    let widgets = match tab {
        DepartmentTab::Overview => overview(ctx, department, &summary),
        DepartmentTab::UseCases => use_cases(ctx, department),
        DepartmentTab::Performance => performance(ctx, department),
        DepartmentTab::Financials => financials(ctx, department, &summary),
    };

    Ok(View {
        page: Page::Department,
        entity: Some(EntityRef {
            id: department.id.clone(),
            name: department.name.clone(),
            color: department.color.clone(),
        }),
        parent: None,
        title: department.name.clone(),
        tab: tab.id(),
        tabs: DepartmentTab::refs(),
        widgets,
    })
}

fn overview(ctx: &ViewContext<'_>, department: &Department, summary: &Summary) -> Vec<Widget> {
    vec![
        Widget::Stats {
            cards: vec![
                StatCard::new("Use Cases", summary.total.to_string())
                    .hint(department.description.clone()),
                StatCard::new("Active", summary.by_status.active.to_string()),
                StatCard::new("Training", summary.by_status.training.to_string()),
                StatCard::new("Pending", summary.by_status.pending.to_string()),
                StatCard::new("Cost Savings", ctx.money(summary.total_cost_savings)),
                StatCard::new("Avg Accuracy", format_pct(summary.avg_accuracy)),
            ],
        },
        Widget::Chart(Chart::new(
            ChartKind::Pie,
            "Status Breakdown",
            series::status_distribution(summary),
        )),
        Widget::Chart(Chart::new(
            ChartKind::Radar,
            "Capability Profile",
            series::capability_radar(&department.use_cases),
        )),
        Widget::Table(in_production(ctx, department)),
    ]
}

fn in_production(ctx: &ViewContext<'_>, department: &Department) -> Table {
    let active = FilterCriteria {
        status: Selection::Only(Status::Active),
        ..FilterCriteria::default()
    };
    let live = filter_use_cases(&department.use_cases, &active);

    let rows = live
        .iter()
        .map(|uc| {
            vec![
                uc.name.clone(),
                format_pct(uc.accuracy),
                ctx.money(uc.cost_savings),
            ]
        })
        .collect();
    let links = live.iter().map(|uc| use_case_link(&uc.id)).collect();

    Table::new("In Production", &["Use Case", "Accuracy", "Cost Savings"], rows)
        .when_empty("No use cases are in production yet.")
        .with_links(links)
}

fn use_cases(ctx: &ViewContext<'_>, department: &Department) -> Vec<Widget> {
    let catalog = ctx.catalog;
    let rows = department
        .use_cases
        .iter()
        .map(|uc| {
            vec![
                uc.name.clone(),
                uc.status.to_string(),
                catalog.ai_types().lookup(&uc.ai_type).name.clone(),
                catalog.data_layers().lookup(&uc.data_layer).name.clone(),
                format_pct(uc.accuracy),
                ctx.money(uc.cost_savings),
            ]
        })
        .collect();
    let links = department
        .use_cases
        .iter()
        .map(|uc| use_case_link(&uc.id))
        .collect();

    vec![Widget::Table(
        Table::new(
            "Use Cases",
            &["Use Case", "Status", "AI Type", "Data Layer", "Accuracy", "Cost Savings"],
            rows,
        )
        .when_empty(NO_USE_CASES)
        .with_links(links),
    )]
}

fn performance(ctx: &ViewContext<'_>, department: &Department) -> Vec<Widget> {
    let rows = department
        .use_cases
        .iter()
        .map(|uc| {
            let filler = ctx.filler.metrics(uc);
            vec![
                uc.name.clone(),
                format_pct(uc.accuracy),
                filler
                    .f1_score
                    .map_or_else(|| "N/A".to_string(), |f1| format!("{f1:.3}")),
                format!("{} ms", filler.p95_latency_ms),
                uc.models.to_string(),
            ]
        })
        .collect();
    let links = department
        .use_cases
        .iter()
        .map(|uc| use_case_link(&uc.id))
        .collect();

    vec![
        Widget::Chart(Chart::new(
            ChartKind::Bar,
            "Accuracy by Use Case (%)",
            series::by_use_case(&department.use_cases, |uc| uc.accuracy),
        )),
        Widget::Chart(Chart::new(
            ChartKind::Scatter,
            "Accuracy vs Cost Savings",
            series::accuracy_vs_savings(&department.use_cases),
        )),
        Widget::Table(
            Table::new(
                "Model Performance",
                &["Use Case", "Accuracy", "F1", "p95 Latency", "Models"],
                rows,
            )
            .when_empty(NO_USE_CASES)
            .with_links(links),
        ),
    ]
}

fn financials(ctx: &ViewContext<'_>, department: &Department, summary: &Summary) -> Vec<Widget> {
    vec![
        Widget::Stats {
            cards: vec![
                StatCard::new("Cost Savings", ctx.money(summary.total_cost_savings)),
                StatCard::new("Revenue", ctx.money(summary.total_revenue)),
                StatCard::new("Investment", ctx.money(summary.total_investment)),
                StatCard::new("ROI", format_roi(summary.roi_pct, summary.total_investment)),
                StatCard::new("Avg Productivity", format_pct(summary.avg_productivity)),
            ],
        },
        Widget::Chart(Chart::new(
            ChartKind::Bar,
            "Cost Savings by Use Case ($M)",
            series::by_use_case(&department.use_cases, |uc| uc.cost_savings),
        )),
        Widget::Chart(Chart::new(
            ChartKind::Bar,
            "Revenue by Use Case ($M)",
            series::by_use_case(&department.use_cases, |uc| uc.revenue),
        )),
        Widget::Chart(Chart::new(
            ChartKind::Line,
            "Realized Value (trailing 12 months, $M)",
            ctx.filler
                .monthly_trend(&department.id, summary.total_value()),
        )),
    ]
}
