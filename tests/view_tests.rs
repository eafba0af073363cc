/// View resolution tests.
///
/// Every page/tab combination resolves on the built-in catalog, and every
/// unresolvable id comes back as `NotFound` with the right entity kind.
use aiportfolio::analytics::{Filler, FilterCriteria, Sort};
use aiportfolio::view::{
    DepartmentTab, NO_RESULTS, PortfolioTab, Tab, Table, UseCaseTab, View, ViewContext, Widget,
    department_view, portfolio_view, use_case_listing, use_case_view,
};
use aiportfolio::{Catalog, EntityKind, ViewError};

fn ctx(catalog: &Catalog) -> ViewContext<'_> {
    ViewContext::new(catalog, Filler::new(42))
}

fn table<'v>(view: &'v View, title: &str) -> &'v Table {
    view.widgets
        .iter()
        .find_map(|w| match w {
            Widget::Table(t) if t.title == title => Some(t),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no table titled {title}"))
}

#[test]
fn every_portfolio_tab_resolves() {
    let catalog = Catalog::builtin().unwrap();
    for tab in PortfolioTab::ALL {
        let view = portfolio_view(&ctx(&catalog), Some(tab.id())).unwrap();
        assert_eq!(view.tab, tab.id());
        assert!(!view.widgets.is_empty(), "tab {}", tab.id());
    }
}

#[test]
fn every_department_tab_resolves() {
    let catalog = Catalog::builtin().unwrap();
    for department in catalog.departments() {
        for tab in DepartmentTab::ALL {
            let view = department_view(&ctx(&catalog), &department.id, Some(tab.id())).unwrap();
            assert_eq!(view.entity.as_ref().unwrap().id, department.id);
        }
    }
}

#[test]
fn every_use_case_tab_resolves() {
    let catalog = Catalog::builtin().unwrap();
    for entry in catalog.entries() {
        for tab in UseCaseTab::ALL {
            let view = use_case_view(&ctx(&catalog), &entry.use_case.id, Some(tab.id())).unwrap();
            assert_eq!(view.parent.as_ref().unwrap().id, entry.department.id);
        }
    }
}

#[test]
fn omitted_tab_selects_first() {
    let catalog = Catalog::builtin().unwrap();
    let view = department_view(&ctx(&catalog), "fraud-detection", None).unwrap();
    assert_eq!(view.tab, DepartmentTab::ALL[0].id());
    assert_eq!(view.tabs.len(), DepartmentTab::ALL.len());
}

#[test]
fn unknown_use_case_is_not_found() {
    let catalog = Catalog::builtin().unwrap();
    let err = use_case_view(&ctx(&catalog), "no-such-use-case", None).unwrap_err();
    assert_eq!(
        err,
        ViewError::not_found(EntityKind::UseCase, "no-such-use-case")
    );
}

#[test]
fn unknown_department_is_not_found() {
    let catalog = Catalog::builtin().unwrap();
    let err = department_view(&ctx(&catalog), "marketing", None).unwrap_err();
    assert_eq!(err, ViewError::not_found(EntityKind::Department, "marketing"));
}

#[test]
fn unknown_tab_is_not_found() {
    let catalog = Catalog::builtin().unwrap();
    let err = portfolio_view(&ctx(&catalog), Some("impact")).unwrap_err();
    assert_eq!(err, ViewError::not_found(EntityKind::Tab, "impact"));
}

#[test]
fn use_case_tables_link_to_detail_pages() {
    let catalog = Catalog::builtin().unwrap();
    let view = department_view(&ctx(&catalog), "fraud-detection", Some("use-cases")).unwrap();
    let table = view
        .widgets
        .iter()
        .find_map(|w| match w {
            Widget::Table(t) => Some(t),
            _ => None,
        })
        .unwrap();

    assert_eq!(table.links.len(), table.rows.len());
    assert!(table.links.iter().all(|l| l.starts_with("#/use-case/")));
}

#[test]
fn empty_listing_carries_no_results_message() {
    let catalog = Catalog::builtin().unwrap();
    let ctx = ctx(&catalog);
    let criteria = FilterCriteria::from_pairs([("search", "zzz-nothing-matches")]).unwrap();
    let listing = use_case_listing(&ctx, &criteria, Sort::default());

    assert!(listing.is_empty());
    assert_eq!(listing.summary.total, 0);
    assert_eq!(listing.empty_message.as_deref(), Some(NO_RESULTS));
    assert_eq!(listing.table(&ctx).empty_message.as_deref(), Some(NO_RESULTS));
}

#[test]
fn views_are_deterministic_for_a_seed() {
    let catalog = Catalog::builtin().unwrap();
    let a = use_case_view(&ctx(&catalog), "card-fraud-scoring", Some("performance")).unwrap();
    let b = use_case_view(&ctx(&catalog), "card-fraud-scoring", Some("performance")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn view_json_has_widget_tags() {
    let catalog = Catalog::builtin().unwrap();
    let view = portfolio_view(&ctx(&catalog), None).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["page"], "portfolio");
    assert_eq!(json["widgets"][0]["widget"], "stats");
}

#[test]
fn department_overview_lists_only_active_use_cases() {
    let catalog = Catalog::builtin().unwrap();
    let view = department_view(&ctx(&catalog), "fraud-detection", None).unwrap();
    let live = table(&view, "In Production");

    let department = catalog.department("fraud-detection").unwrap();
    let active = department
        .use_cases
        .iter()
        .filter(|uc| uc.status == aiportfolio::catalog::Status::Active)
        .count();
    assert_eq!(live.rows.len(), active);
    assert_eq!(live.links.len(), active);
}

#[test]
fn department_without_active_use_cases_explains_empty_table() {
    let catalog = Catalog::from_toml_str(
        r##"
[[ai_types]]
id = "nlp"
name = "NLP"
color = "#bc8cff"

[[data_layers]]
id = "silver"
name = "Silver"
color = "#8b949e"

[[departments]]
id = "compliance"
name = "Compliance"

[[departments.use_cases]]
id = "policy-copilot"
name = "Policy Copilot"
status = "pending"
ai_type = "nlp"
data_layer = "silver"
"##,
    )
    .unwrap();
    let view = department_view(&ctx(&catalog), "compliance", None).unwrap();
    let live = table(&view, "In Production");

    assert!(live.is_empty());
    let message = live.empty_message.as_deref().unwrap();
    assert_ne!(message, NO_RESULTS);
}

#[test]
fn unfiltered_empty_tables_do_not_mention_filters() {
    let catalog = Catalog::builtin().unwrap();
    let mut ctx = ctx(&catalog);
    ctx.top_n = 0;
    let view = portfolio_view(&ctx, Some("performance")).unwrap();
    let top = table(&view, "Top Use Cases by Accuracy");

    assert!(top.is_empty());
    let message = top.empty_message.as_deref().unwrap();
    assert_ne!(message, NO_RESULTS);
}
