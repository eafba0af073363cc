/// Aggregation tests.
///
/// Exercise `summarize` and `portfolio_summary` through the public API, on
/// both hand-built catalogs and the built-in one.
use aiportfolio::Catalog;
use aiportfolio::analytics::{portfolio_summary, summarize};
use aiportfolio::catalog::Status;

const FRAUD_ONLY: &str = r##"
[[ai_types]]
id = "machine-learning"
name = "Machine Learning"
color = "#58a6ff"

[[data_layers]]
id = "gold"
name = "Gold"
color = "#d29922"

[[departments]]
id = "fraud-detection"
name = "Fraud Detection"

[[departments.use_cases]]
id = "card-fraud-scoring"
name = "Card Fraud Scoring"
status = "active"
ai_type = "machine-learning"
data_layer = "gold"
accuracy = 94.2
cost_savings = 45.2
revenue = 15.8

[[departments.use_cases]]
id = "aml-graph-analytics"
name = "AML Graph Analytics"
status = "training"
ai_type = "machine-learning"
data_layer = "gold"
"##;

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[test]
fn fraud_department_scenario() {
    let catalog = Catalog::from_toml_str(FRAUD_ONLY).unwrap();
    let fraud = catalog.department("fraud-detection").unwrap();
    let summary = summarize(&fraud.use_cases);

    assert_eq!(summary.total, 2);
    assert_eq!(summary.by_status.active, 1);
    assert_eq!(summary.by_status.training, 1);
    assert!((summary.total_cost_savings - 45.2).abs() < 1e-9);
    assert!((summary.total_revenue - 15.8).abs() < 1e-9);
    // The training entry has no accuracy and is skipped, not averaged as 0.
    assert!((summary.avg_accuracy - 94.2).abs() < 1e-9);
}

#[test]
fn scenario_portfolio_matches_single_department() {
    let catalog = Catalog::from_toml_str(FRAUD_ONLY).unwrap();
    let portfolio = portfolio_summary(&catalog);
    assert_eq!(portfolio.departments.len(), 1);
    assert_eq!(portfolio.total, portfolio.departments[0].summary);
}

// ---------------------------------------------------------------------------
// Invariants on the built-in catalog
// ---------------------------------------------------------------------------

#[test]
fn status_counts_partition_every_department() {
    let catalog = Catalog::builtin().unwrap();
    for department in catalog.departments() {
        let summary = summarize(&department.use_cases);
        let by_status: usize = Status::ALL
            .iter()
            .map(|&s| summary.by_status.get(s))
            .sum();
        assert_eq!(by_status, summary.total, "department {}", department.id);
        assert_eq!(summary.total, department.use_cases.len());
    }
}

#[test]
fn department_totals_add_up_to_portfolio() {
    let catalog = Catalog::builtin().unwrap();
    let portfolio = portfolio_summary(&catalog);

    let savings: f64 = portfolio
        .departments
        .iter()
        .map(|d| d.summary.total_cost_savings)
        .sum();
    let revenue: f64 = portfolio
        .departments
        .iter()
        .map(|d| d.summary.total_revenue)
        .sum();
    let count: usize = portfolio.departments.iter().map(|d| d.summary.total).sum();

    assert_eq!(savings, portfolio.total.total_cost_savings);
    assert_eq!(revenue, portfolio.total.total_revenue);
    assert_eq!(count, portfolio.total.total);
    assert_eq!(count, catalog.use_case_count());
}

#[test]
fn category_counts_cover_all_use_cases() {
    let catalog = Catalog::builtin().unwrap();
    let summary = summarize(catalog.entries().map(|e| e.use_case));
    assert_eq!(summary.by_ai_type.values().sum::<usize>(), summary.total);
    assert_eq!(summary.by_data_layer.values().sum::<usize>(), summary.total);
}

#[test]
fn averages_are_never_nan() {
    let catalog = Catalog::builtin().unwrap();
    let portfolio = portfolio_summary(&catalog);
    for d in &portfolio.departments {
        assert!(d.summary.avg_accuracy.is_finite());
        assert!(d.summary.avg_productivity.is_finite());
        assert!(d.summary.roi_pct.is_finite());
        assert!((0.0..=100.0).contains(&d.summary.avg_accuracy));
    }
}

#[test]
fn empty_set_summarizes_to_zero() {
    let summary = summarize(std::iter::empty());
    assert_eq!(summary.total, 0);
    assert_eq!(summary.avg_accuracy, 0.0);
    assert_eq!(summary.roi_pct, 0.0);
    assert_eq!(summary.by_status.pct(0), 0.0);
}
