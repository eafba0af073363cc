/// Filtering and sorting tests.
///
/// Criteria are built the way the web API builds them: from decoded
/// query-string pairs.
use aiportfolio::Catalog;
use aiportfolio::FilterError;
use aiportfolio::analytics::{
    FilterCriteria, Selection, Sort, SortKey, SortOrder, filter_entries, filter_use_cases,
    sort_entries,
};
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

[[departments.use_cases]]
id = "aml-graph-analytics"
name = "AML Graph Analytics"
status = "training"
ai_type = "machine-learning"
data_layer = "gold"
"##;

fn criteria(pairs: &[(&str, &str)]) -> FilterCriteria {
    FilterCriteria::from_pairs(pairs.iter().copied()).unwrap()
}

#[test]
fn empty_search_returns_everything_in_order() {
    let catalog = Catalog::builtin().unwrap();
    let all: Vec<&str> = catalog.entries().map(|e| e.use_case.id.as_str()).collect();

    let filtered = filter_entries(catalog.entries(), &criteria(&[("search", "")]));
    let ids: Vec<&str> = filtered.iter().map(|e| e.use_case.id.as_str()).collect();
    assert_eq!(ids, all);
}

#[test]
fn all_is_the_same_as_absent() {
    let explicit = criteria(&[
        ("status", "all"),
        ("ai_type", "all"),
        ("data_layer", ""),
        ("department", "all"),
    ]);
    assert!(explicit.is_unconstrained());
    assert_eq!(explicit, FilterCriteria::default());
}

#[test]
fn search_is_case_insensitive() {
    let catalog = Catalog::builtin().unwrap();
    let filtered = filter_entries(catalog.entries(), &criteria(&[("search", "FRAUD")]));
    assert!(!filtered.is_empty());
    assert!(
        filtered
            .iter()
            .all(|e| e.use_case.name.to_lowercase().contains("fraud"))
    );
}

#[test]
fn criteria_combine_with_and() {
    let catalog = Catalog::builtin().unwrap();
    let c = criteria(&[("status", "active"), ("department", "credit-risk")]);
    let filtered = filter_entries(catalog.entries(), &c);

    assert!(!filtered.is_empty());
    for entry in &filtered {
        assert_eq!(entry.use_case.status, Status::Active);
        assert_eq!(entry.department.id, "credit-risk");
    }
}

#[test]
fn unmatched_criteria_yield_empty_list() {
    let catalog = Catalog::builtin().unwrap();
    let c = criteria(&[("ai_type", "no-such-type")]);
    assert_eq!(c.ai_type, Selection::Only("no-such-type".to_string()));
    assert!(filter_entries(catalog.entries(), &c).is_empty());
}

#[test]
fn bad_status_is_rejected() {
    let err = FilterCriteria::from_pairs([("status", "retired")]).unwrap_err();
    assert_eq!(err, FilterError::UnknownStatus("retired".to_string()));
}

#[test]
fn status_parses_case_insensitively() {
    let c = criteria(&[("status", "Training")]);
    assert_eq!(c.status, Selection::Only(Status::Training));
}

#[test]
fn sort_by_accuracy_descending() {
    let catalog = Catalog::builtin().unwrap();
    let mut entries: Vec<_> = catalog.entries().collect();
    sort_entries(
        &mut entries,
        Sort {
            key: SortKey::Accuracy,
            order: SortOrder::Desc,
        },
    );

    let accuracies: Vec<f64> = entries.iter().map(|e| e.use_case.accuracy).collect();
    assert!(accuracies.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn sort_parameters_from_pairs() {
    let sort = Sort::from_pairs([("sort", "revenue"), ("order", "desc")]).unwrap();
    assert_eq!(sort.key, SortKey::Revenue);
    assert_eq!(sort.order, SortOrder::Desc);

    assert_eq!(Sort::from_pairs([("x", "y")]).unwrap(), Sort::default());
    assert!(Sort::from_pairs([("order", "sideways")]).is_err());
}

#[test]
fn status_absent_from_set_yields_empty_list() {
    let catalog = Catalog::from_toml_str(FRAUD_ONLY).unwrap();
    let fraud = catalog.department("fraud-detection").unwrap();

    let pending = filter_use_cases(&fraud.use_cases, &criteria(&[("status", "pending")]));
    assert!(pending.is_empty());

    let active = filter_use_cases(&fraud.use_cases, &criteria(&[("status", "active")]));
    let ids: Vec<&str> = active.iter().map(|uc| uc.id.as_str()).collect();
    assert_eq!(ids, ["card-fraud-scoring"]);
}

#[test]
fn use_case_filter_keeps_input_order() {
    let catalog = Catalog::from_toml_str(FRAUD_ONLY).unwrap();
    let fraud = catalog.department("fraud-detection").unwrap();

    let all = filter_use_cases(&fraud.use_cases, &FilterCriteria::default());
    let ids: Vec<&str> = all.iter().map(|uc| uc.id.as_str()).collect();
    assert_eq!(ids, ["card-fraud-scoring", "aml-graph-analytics"]);
}
