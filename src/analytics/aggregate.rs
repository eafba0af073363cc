//! Aggregation over use-case sets: status and category counts, financial
//! totals, N/A-aware averages, and ROI.
//!
//! Every function here is total: empty inputs and zero denominators produce
//! `0.0`, never `NaN` and never an error.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Catalog, Department, Status, UseCase};

// ---------------------------------------------------------------------------
// Status counts
// ---------------------------------------------------------------------------

/// Number of use cases in each lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub training: usize,
    pub pending: usize,
}

impl StatusCounts {
    fn record(&mut self, status: Status) {
        match status {
            Status::Active => self.active += 1,
            Status::Training => self.training += 1,
            Status::Pending => self.pending += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Active => self.active,
            Status::Training => self.training,
            Status::Pending => self.pending,
        }
    }

    pub fn total(&self) -> usize {
        self.active + self.training + self.pending
    }

    /// Percentage for a given count, returns 0.0 if total is zero.
    pub fn pct(&self, count: usize) -> f64 {
        ratio_pct(count as f64, self.total() as f64)
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Summary statistics over a set of use cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub by_status: StatusCounts,
    /// AI-type id -> use-case count.
    pub by_ai_type: BTreeMap<String, usize>,
    /// Data-layer id -> use-case count.
    pub by_data_layer: BTreeMap<String, usize>,
    pub total_cost_savings: f64,
    pub total_revenue: f64,
    pub total_investment: f64,
    pub total_models: u64,
    /// Mean over use cases with productivity > 0.
    pub avg_productivity: f64,
    /// Mean over use cases with accuracy > 0.
    pub avg_accuracy: f64,
    pub roi_pct: f64,
}

impl Summary {
    /// Cost savings plus revenue.
    pub fn total_value(&self) -> f64 {
        self.total_cost_savings + self.total_revenue
    }

    fn refresh_roi(&mut self) {
        self.roi_pct = roi_pct(self.total_value(), self.total_investment);
    }
}

/// Summarize any sequence of use cases.
pub fn summarize<'a, I>(use_cases: I) -> Summary
where
    I: IntoIterator<Item = &'a UseCase>,
{
    let mut summary = Summary::default();
    let mut accuracy = Mean::default();
    let mut productivity = Mean::default();

    for uc in use_cases {
        summary.total += 1;
        summary.by_status.record(uc.status);
        *summary.by_ai_type.entry(uc.ai_type.clone()).or_default() += 1;
        *summary.by_data_layer.entry(uc.data_layer.clone()).or_default() += 1;
        summary.total_cost_savings += uc.cost_savings;
        summary.total_revenue += uc.revenue;
        summary.total_investment += uc.investment;
        summary.total_models += u64::from(uc.models);
        accuracy.push_applicable(uc.accuracy);
        productivity.push_applicable(uc.productivity);
    }

    summary.avg_accuracy = accuracy.value();
    summary.avg_productivity = productivity.value();
    summary.refresh_roi();
    summary
}

// ---------------------------------------------------------------------------
// Department / portfolio rollups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentSummary {
    pub id: String,
    pub name: String,
    pub color: String,
    pub summary: Summary,
}

impl DepartmentSummary {
    pub fn of(department: &Department) -> Self {
        Self {
            id: department.id.clone(),
            name: department.name.clone(),
            color: department.color.clone(),
            summary: summarize(&department.use_cases),
        }
    }
}

/// Per-department summaries plus the portfolio-wide total.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub departments: Vec<DepartmentSummary>,
    pub total: Summary,
}

/// Roll the whole catalog up by department.
///
/// Portfolio monetary totals are the sums of the department totals, so the
/// summary view and the department views always agree.
pub fn portfolio_summary(catalog: &Catalog) -> PortfolioSummary {
    let departments: Vec<DepartmentSummary> = catalog
        .departments()
        .iter()
        .map(DepartmentSummary::of)
        .collect();

    let mut total = summarize(catalog.entries().map(|e| e.use_case));
    total.total_cost_savings = departments
        .iter()
        .map(|d| d.summary.total_cost_savings)
        .sum();
    total.total_revenue = departments.iter().map(|d| d.summary.total_revenue).sum();
    total.total_investment = departments
        .iter()
        .map(|d| d.summary.total_investment)
        .sum();
    total.refresh_roi();

    PortfolioSummary { departments, total }
}

// ---------------------------------------------------------------------------
// Arithmetic helpers
// ---------------------------------------------------------------------------

/// Running mean that ignores "not applicable" (zero) samples.
#[derive(Debug, Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push_applicable(&mut self, value: f64) {
        if value > 0.0 {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// `part / whole * 100`, or 0 when `whole` is zero.
pub fn ratio_pct(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        (part / whole) * 100.0
    }
}

/// Return on investment in percent: `(value - investment) / investment`.
pub fn roi_pct(value: f64, investment: f64) -> f64 {
    if investment <= 0.0 {
        0.0
    } else {
        ((value - investment) / investment) * 100.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Risk;

    fn use_case(id: &str, status: Status, accuracy: f64, savings: f64, revenue: f64) -> UseCase {
        UseCase {
            id: id.to_string(),
            name: id.to_string(),
            status,
            ai_type: "machine-learning".to_string(),
            data_layer: "gold".to_string(),
            accuracy,
            cost_savings: savings,
            revenue,
            productivity: 0.0,
            models: 1,
            investment: 0.0,
            owner: String::new(),
            risk: Risk::default(),
        }
    }

    #[test]
    fn fraud_detection_scenario() {
        let cases = vec![
            use_case("a", Status::Active, 94.2, 45.2, 15.8),
            use_case("b", Status::Training, 0.0, 0.0, 0.0),
        ];
        let summary = summarize(&cases);

        assert_eq!(summary.by_status.active, 1);
        assert_eq!(summary.by_status.training, 1);
        assert!((summary.total_cost_savings - 45.2).abs() < 1e-9);
        assert!((summary.total_revenue - 15.8).abs() < 1e-9);
        assert!((summary.avg_accuracy - 94.2).abs() < 1e-9);
    }

    #[test]
    fn empty_set_is_all_zero() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_accuracy, 0.0);
        assert_eq!(summary.avg_productivity, 0.0);
        assert_eq!(summary.roi_pct, 0.0);
        assert_eq!(summary.by_status.pct(0), 0.0);
    }

    #[test]
    fn all_na_accuracy_averages_to_zero() {
        let cases = vec![
            use_case("a", Status::Pending, 0.0, 1.0, 0.0),
            use_case("b", Status::Pending, 0.0, 2.0, 0.0),
        ];
        let summary = summarize(&cases);
        assert_eq!(summary.avg_accuracy, 0.0);
        assert!(!summary.avg_accuracy.is_nan());
    }

    #[test]
    fn category_counts() {
        let mut nlp = use_case("c", Status::Active, 80.0, 0.0, 0.0);
        nlp.ai_type = "nlp".to_string();
        let cases = vec![use_case("a", Status::Active, 90.0, 0.0, 0.0), nlp];
        let summary = summarize(&cases);
        assert_eq!(summary.by_ai_type["machine-learning"], 1);
        assert_eq!(summary.by_ai_type["nlp"], 1);
        assert_eq!(summary.by_data_layer["gold"], 2);
    }

    #[test]
    fn roi_from_investment() {
        assert!((roi_pct(30.0, 10.0) - 200.0).abs() < 1e-9);
        assert_eq!(roi_pct(30.0, 0.0), 0.0);
    }

    #[test]
    fn portfolio_totals_match_department_sums() {
        let catalog = Catalog::builtin().unwrap();
        let portfolio = portfolio_summary(&catalog);

        let savings: f64 = portfolio
            .departments
            .iter()
            .map(|d| d.summary.total_cost_savings)
            .sum();
        assert_eq!(portfolio.total.total_cost_savings, savings);
        assert_eq!(portfolio.total.total, catalog.use_case_count());
    }
}
