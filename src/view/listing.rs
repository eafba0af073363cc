//! The filterable use-case explorer.

use serde::Serialize;

use crate::analytics::aggregate::{Summary, summarize};
use crate::analytics::filter::{FilterCriteria, Sort, filter_entries, sort_entries};
use crate::catalog::{Entry, Status};

use super::{NO_RESULTS, Table, ViewContext, format_pct, use_case_link};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub id: String,
    pub name: String,
    pub department_id: String,
    pub department: String,
    pub status: Status,
    pub ai_type: String,
    pub ai_type_color: String,
    pub data_layer: String,
    pub accuracy: f64,
    pub cost_savings: f64,
    pub revenue: f64,
    pub productivity: f64,
}

/// Filtered, sorted use cases plus the aggregate of exactly that subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub criteria: FilterCriteria,
    pub sort: Sort,
    /// Number of use cases in the whole catalog.
    pub catalog_total: usize,
    pub summary: Summary,
    pub rows: Vec<ListingRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as a table widget.
    pub fn table(&self, ctx: &ViewContext<'_>) -> Table {
        let rows = self
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.department.clone(),
                    r.status.to_string(),
                    r.ai_type.clone(),
                    r.data_layer.clone(),
                    format_pct(r.accuracy),
                    ctx.money(r.cost_savings),
                    ctx.money(r.revenue),
                ]
            })
            .collect();
        let links = self.rows.iter().map(|r| use_case_link(&r.id)).collect();

        Table::new(
            format!("Use Cases ({} of {})", self.rows.len(), self.catalog_total),
            &[
                "Use Case",
                "Department",
                "Status",
                "AI Type",
                "Data Layer",
                "Accuracy",
                "Cost Savings",
                "Revenue",
            ],
            rows,
        )
        .when_empty(NO_RESULTS)
        .with_links(links)
    }
}

/// Apply `criteria` to the whole catalog, then sort.
pub fn use_case_listing(ctx: &ViewContext<'_>, criteria: &FilterCriteria, sort: Sort) -> Listing {
    let catalog = ctx.catalog;
    let mut entries = filter_entries(catalog.entries(), criteria);
    sort_entries(&mut entries, sort);

    let summary = summarize(entries.iter().map(|e| e.use_case));
    let rows: Vec<ListingRow> = entries.iter().map(|e| row(ctx, e)).collect();
    let empty_message = rows.is_empty().then(|| NO_RESULTS.to_string());

    tracing::debug!(
        matched = rows.len(),
        total = catalog.use_case_count(),
        "use-case listing filtered"
    );

    Listing {
        criteria: criteria.clone(),
        sort,
        catalog_total: catalog.use_case_count(),
        summary,
        rows,
        empty_message,
    }
}

fn row(ctx: &ViewContext<'_>, entry: &Entry<'_>) -> ListingRow {
    let uc = entry.use_case;
    let ai_type = ctx.catalog.ai_types().lookup(&uc.ai_type);
    ListingRow {
        id: uc.id.clone(),
        name: uc.name.clone(),
        department_id: entry.department.id.clone(),
        department: entry.department.name.clone(),
        status: uc.status,
        ai_type: ai_type.name.clone(),
        ai_type_color: ai_type.color.clone(),
        data_layer: ctx.catalog.data_layers().lookup(&uc.data_layer).name.clone(),
        accuracy: uc.accuracy,
        cost_savings: uc.cost_savings,
        revenue: uc.revenue,
        productivity: uc.productivity,
    }
}
