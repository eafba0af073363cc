//! View selection: turn navigation parameters (page, entity id, tab id) into
//! the dataset and layout a page renders.
//!
//! Three pages exist, each with a fixed tab set:
//!
//! | page       | tabs                                              |
//! |------------|---------------------------------------------------|
//! | portfolio  | overview, departments, categories, performance    |
//! | department | overview, use-cases, performance, financials      |
//! | use-case   | overview, performance, impact                     |
//!
//! An omitted tab selects the first one. An id that does not resolve, for
//! any entity or tab, is a [`ViewError::NotFound`]; there is no fallback.

mod department;
pub mod layout;
mod listing;
mod portfolio;
mod use_case;

use serde::Serialize;

use crate::analytics::Filler;
use crate::catalog::{Catalog, Category, Entry};
use crate::config::AppConfig;
use crate::error::{EntityKind, ViewError};

pub use department::department_view;
pub use layout::{Chart, ChartKind, NO_DATA, NO_RESULTS, StatCard, Table, Widget};
pub use listing::{Listing, ListingRow, use_case_listing};
pub use portfolio::portfolio_view;
pub use use_case::use_case_view;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

pub trait Tab: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn id(self) -> &'static str;
    fn title(self) -> &'static str;

    /// Resolve a tab id; `None` or `""` selects the first tab.
    fn resolve(id: Option<&str>) -> Result<Self, ViewError> {
        match id {
            None | Some("") => Ok(Self::ALL[0]),
            Some(id) => Self::ALL
                .iter()
                .copied()
                .find(|tab| tab.id() == id)
                .ok_or_else(|| ViewError::not_found(EntityKind::Tab, id)),
        }
    }

    fn refs() -> Vec<TabRef> {
        Self::ALL
            .iter()
            .map(|tab| TabRef {
                id: tab.id(),
                title: tab.title(),
            })
            .collect()
    }
}

macro_rules! tab_enum {
    ($name:ident { $($variant:ident => ($id:literal, $title:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl Tab for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id),+
                }
            }

            fn title(self) -> &'static str {
                match self {
                    $(Self::$variant => $title),+
                }
            }
        }
    };
}

tab_enum!(PortfolioTab {
    Overview => ("overview", "Overview"),
    Departments => ("departments", "Departments"),
    Categories => ("categories", "Categories"),
    Performance => ("performance", "Performance"),
});

tab_enum!(DepartmentTab {
    Overview => ("overview", "Overview"),
    UseCases => ("use-cases", "Use Cases"),
    Performance => ("performance", "Performance"),
    Financials => ("financials", "Financials"),
});

tab_enum!(UseCaseTab {
    Overview => ("overview", "Overview"),
    Performance => ("performance", "Performance"),
    Impact => ("impact", "Impact"),
});

// ---------------------------------------------------------------------------
// View output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Portfolio,
    Department,
    UseCase,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabRef {
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// A fully resolved page: which tab is selected and what to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,
    /// Link to the parent page, e.g. the owning department of a use case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<EntityRef>,
    pub title: String,
    pub tab: &'static str,
    pub tabs: Vec<TabRef>,
    pub widgets: Vec<Widget>,
}

/// Everything a resolver reads. Cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub filler: Filler,
    /// Decimal places for money values.
    pub decimals: usize,
    /// Row limit for "top N" tables.
    pub top_n: usize,
}

impl<'a> ViewContext<'a> {
    pub fn new(catalog: &'a Catalog, filler: Filler) -> Self {
        Self {
            catalog,
            filler,
            decimals: 1,
            top_n: 10,
        }
    }

    /// Context with the display and filler settings from `config`.
    pub fn from_config(catalog: &'a Catalog, config: &AppConfig) -> Self {
        Self {
            catalog,
            filler: Filler::new(config.filler.seed),
            decimals: config.display.currency_decimals,
            top_n: config.display.top_n,
        }
    }

    pub fn money(&self, value: f64) -> String {
        format_money(value, self.decimals)
    }
}

// ---------------------------------------------------------------------------
// Use-case detail
// ---------------------------------------------------------------------------

/// A use case with its owning department and resolved category metadata.
#[derive(Debug, Clone, Copy)]
pub struct UseCaseDetail<'a> {
    pub entry: Entry<'a>,
    pub ai_type: &'a Category,
    pub data_layer: &'a Category,
}

/// Resolve a use-case id. An id absent from the catalog is `NotFound`.
pub fn use_case_detail<'a>(catalog: &'a Catalog, id: &str) -> Result<UseCaseDetail<'a>, ViewError> {
    let entry = catalog
        .use_case(id)
        .ok_or_else(|| ViewError::not_found(EntityKind::UseCase, id))?;
    Ok(UseCaseDetail {
        entry,
        ai_type: catalog.ai_types().lookup(&entry.use_case.ai_type),
        data_layer: catalog.data_layers().lookup(&entry.use_case.data_layer),
    })
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// `$45.2M`, or `-` for a zero (not applicable) amount.
pub fn format_money(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        "-".to_string()
    } else {
        format!("${value:.decimals$}M")
    }
}

/// `94.2%`, or `N/A` for zero.
pub fn format_pct(value: f64) -> String {
    if value == 0.0 {
        "N/A".to_string()
    } else {
        format!("{value:.1}%")
    }
}

/// ROI keeps its sign and shows `N/A` only when there was no investment.
pub fn format_roi(roi: f64, investment: f64) -> String {
    if investment <= 0.0 {
        "N/A".to_string()
    } else {
        format!("{roi:.0}%")
    }
}

pub(crate) fn department_link(id: &str) -> String {
    format!("#/department/{id}")
}

pub(crate) fn use_case_link(id: &str) -> String {
    format!("#/use-case/{id}")
}
