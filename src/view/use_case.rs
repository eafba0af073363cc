use crate::analytics::aggregate::roi_pct;
use crate::analytics::series::{Point, status_color};
use crate::catalog::Entry;
use crate::error::ViewError;

use super::{
    Chart, ChartKind, EntityRef, Page, StatCard, Tab, UseCaseDetail, UseCaseTab, View,
    ViewContext, Widget, format_pct, format_roi, use_case_detail,
};

/// Resolve a use-case detail page. An id absent from the catalog is
/// `NotFound`; no default record is substituted.
pub fn use_case_view(
    ctx: &ViewContext<'_>,
    use_case_id: &str,
    tab: Option<&str>,
) -> Result<View, ViewError> {
    let detail = use_case_detail(ctx.catalog, use_case_id)?;
    let tab = UseCaseTab::resolve(tab)?;

    let widgets = match tab {
        UseCaseTab::Overview => overview(&detail),
        UseCaseTab::Performance => performance(ctx, &detail),
        UseCaseTab::Impact => impact(ctx, &detail),
    };

    let Entry { department, use_case } = detail.entry;
    Ok(View {
        page: Page::UseCase,
        entity: Some(EntityRef {
            id: use_case.id.clone(),
            name: use_case.name.clone(),
            color: status_color(use_case.status).to_string(),
        }),
        parent: Some(EntityRef {
            id: department.id.clone(),
            name: department.name.clone(),
            color: department.color.clone(),
        }),
        title: use_case.name.clone(),
        tab: tab.id(),
        tabs: UseCaseTab::refs(),
        widgets,
    })
}

fn overview(detail: &UseCaseDetail<'_>) -> Vec<Widget> {
    let uc = detail.entry.use_case;
    let owner = if uc.owner.is_empty() { "-" } else { uc.owner.as_str() };
    vec![Widget::Stats {
        cards: vec![
            StatCard::new("Status", uc.status.to_string()),
            StatCard::new("Department", detail.entry.department.name.clone()),
            StatCard::new("AI Type", detail.ai_type.name.clone()),
            StatCard::new("Data Layer", detail.data_layer.name.clone()),
            StatCard::new("Models", uc.models.to_string()),
            StatCard::new("Owner", owner),
            StatCard::new("Risk", uc.risk.to_string()),
        ],
    }]
}

fn performance(ctx: &ViewContext<'_>, detail: &UseCaseDetail<'_>) -> Vec<Widget> {
    let uc = detail.entry.use_case;
    let filler = ctx.filler.metrics(uc);

    let mut widgets = vec![Widget::Stats {
        cards: vec![
            StatCard::new("Accuracy", format_pct(uc.accuracy)),
            StatCard::new(
                "F1 Score",
                filler
                    .f1_score
                    .map_or_else(|| "N/A".to_string(), |f1| format!("{f1:.3}")),
            )
            .hint("simulated"),
            StatCard::new("p95 Latency", format!("{} ms", filler.p95_latency_ms)).hint("simulated"),
            StatCard::new("Monthly Requests", filler.monthly_requests.to_string())
                .hint("simulated"),
        ],
    }];

    if uc.accuracy > 0.0 {
        widgets.push(Widget::Chart(Chart::new(
            ChartKind::Line,
            "Accuracy (trailing 12 months, %)",
            ctx.filler
                .monthly_trend(&format!("{}:accuracy", uc.id), uc.accuracy),
        )));
    }

    widgets
}

fn impact(ctx: &ViewContext<'_>, detail: &UseCaseDetail<'_>) -> Vec<Widget> {
    let uc = detail.entry.use_case;
    let value = uc.cost_savings + uc.revenue;

    vec![
        Widget::Stats {
            cards: vec![
                StatCard::new("Cost Savings", ctx.money(uc.cost_savings)),
                StatCard::new("Revenue", ctx.money(uc.revenue)),
                StatCard::new("Productivity", format_pct(uc.productivity)),
                StatCard::new("ROI", format_roi(roi_pct(value, uc.investment), uc.investment)),
            ],
        },
        Widget::Chart(Chart::new(
            ChartKind::Bar,
            "Financial Impact ($M)",
            vec![
                Point::labeled("Cost Savings", uc.cost_savings).with_color("#3fb950"),
                Point::labeled("Revenue", uc.revenue).with_color("#58a6ff"),
                Point::labeled("Investment", uc.investment).with_color("#d29922"),
            ],
        )),
        Widget::Chart(Chart::new(
            ChartKind::Line,
            "Realized Value (trailing 12 months, $M)",
            ctx.filler.monthly_trend(&uc.id, value),
        )),
    ]
}
