//! Chart series builders.
//!
//! Every chart the dashboard draws is fed a `Vec<Point>`; the frontend only
//! decides how to paint it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analytics::aggregate::{PortfolioSummary, Summary, ratio_pct};
use crate::catalog::{CategoryTable, Status, UseCase};

/// X coordinate: a category label or a numeric value (scatter charts).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum X {
    Label(String),
    Value(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: X,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Point {
    pub fn labeled(x: impl Into<String>, y: f64) -> Self {
        Self {
            x: X::Label(x.into()),
            y,
            label: None,
            color: None,
        }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: X::Value(x),
            y,
            label: None,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Palette color for a lifecycle status.
pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Active => "#3fb950",
        Status::Training => "#d29922",
        Status::Pending => "#8b949e",
    }
}

/// One slice per status (pie chart). Zero-count statuses are kept so the
/// legend is stable.
pub fn status_distribution(summary: &Summary) -> Vec<Point> {
    Status::ALL
        .iter()
        .map(|&status| {
            Point::labeled(status.as_str(), summary.by_status.get(status) as f64)
                .with_color(status_color(status))
        })
        .collect()
}

/// One bar per category in table order, followed by any ids the table does
/// not know (rendered with the "unknown" metadata).
pub fn category_distribution(
    counts: &BTreeMap<String, usize>,
    table: &CategoryTable,
) -> Vec<Point> {
    let mut points: Vec<Point> = table
        .iter()
        .map(|c| {
            let count = counts.get(&c.id).copied().unwrap_or(0);
            Point::labeled(c.name.as_str(), count as f64).with_color(c.color.as_str())
        })
        .collect();

    for (id, &count) in counts {
        if !table.contains(id) {
            let meta = table.lookup(id);
            points.push(
                Point::labeled(meta.name.as_str(), count as f64).with_color(meta.color.as_str()),
            );
        }
    }

    points
}

/// One bar per department using `metric` of its summary.
pub fn by_department(portfolio: &PortfolioSummary, metric: fn(&Summary) -> f64) -> Vec<Point> {
    portfolio
        .departments
        .iter()
        .map(|d| Point::labeled(d.name.as_str(), metric(&d.summary)).with_color(d.color.as_str()))
        .collect()
}

/// One bar per use case using `metric`; zero (N/A) values are skipped.
pub fn by_use_case<'a, I>(use_cases: I, metric: fn(&UseCase) -> f64) -> Vec<Point>
where
    I: IntoIterator<Item = &'a UseCase>,
{
    use_cases
        .into_iter()
        .filter_map(|uc| {
            let y = metric(uc);
            (y > 0.0).then(|| {
                Point::labeled(uc.name.as_str(), y).with_color(status_color(uc.status))
            })
        })
        .collect()
}

/// Accuracy (x) against cost savings (y). Use cases without a recorded
/// accuracy are left out.
pub fn accuracy_vs_savings<'a, I>(use_cases: I) -> Vec<Point>
where
    I: IntoIterator<Item = &'a UseCase>,
{
    use_cases
        .into_iter()
        .filter(|uc| uc.accuracy > 0.0)
        .map(|uc| {
            Point::xy(uc.accuracy, uc.cost_savings)
                .with_label(uc.name.as_str())
                .with_color(status_color(uc.status))
        })
        .collect()
}

/// Five capability axes, each a 0–100 percentage.
///
/// - Accuracy: mean recorded accuracy
/// - Productivity: mean recorded productivity gain, capped at 100
/// - Adoption: share of use cases in production
/// - Readiness: share active or training
/// - Coverage: share with a recorded accuracy
pub fn capability_radar<'a, I>(use_cases: I) -> Vec<Point>
where
    I: IntoIterator<Item = &'a UseCase>,
{
    let use_cases: Vec<&UseCase> = use_cases.into_iter().collect();
    let summary = crate::analytics::aggregate::summarize(use_cases.iter().copied());
    let total = summary.total as f64;
    let measured = use_cases.iter().filter(|uc| uc.accuracy > 0.0).count() as f64;

    vec![
        Point::labeled("Accuracy", summary.avg_accuracy),
        Point::labeled("Productivity", summary.avg_productivity.min(100.0)),
        Point::labeled("Adoption", ratio_pct(summary.by_status.active as f64, total)),
        Point::labeled(
            "Readiness",
            ratio_pct((summary.by_status.active + summary.by_status.training) as f64, total),
        ),
        Point::labeled("Coverage", ratio_pct(measured, total)),
    ]
}
