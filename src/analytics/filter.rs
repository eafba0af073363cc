//! Use-case filtering and sorting.
//!
//! A [`FilterCriteria`] is a conjunction: the name must contain the search
//! text (case-insensitive) and every constrained field must match exactly.
//! `Selection::All` places no constraint on its field.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::{Entry, Status, UseCase};
use crate::error::FilterError;

/// A single-field constraint: either everything or exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn admits<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// `""` and `"all"` (any case) mean no constraint.
fn is_all_value(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("all")
}

fn parse_id_selection(raw: &str) -> Selection<String> {
    if is_all_value(raw) {
        Selection::All
    } else {
        Selection::Only(raw.to_string())
    }
}

fn parse_status_selection(raw: &str) -> Result<Selection<Status>, FilterError> {
    if is_all_value(raw) {
        return Ok(Selection::All);
    }
    Status::parse(raw)
        .map(Selection::Only)
        .ok_or_else(|| FilterError::UnknownStatus(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub search: String,
    pub status: Selection<Status>,
    pub ai_type: Selection<String>,
    pub data_layer: Selection<String>,
    pub department: Selection<String>,
}

impl FilterCriteria {
    /// Build criteria from `key=value` pairs such as a decoded query string.
    ///
    /// Recognized keys: `search` (alias `q`), `status`, `ai_type`,
    /// `data_layer`, `department`. Other keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::default();
        for (key, value) in pairs {
            match key {
                "search" | "q" => criteria.search = value.to_string(),
                "status" => criteria.status = parse_status_selection(value)?,
                "ai_type" => criteria.ai_type = parse_id_selection(value),
                "data_layer" => criteria.data_layer = parse_id_selection(value),
                "department" => criteria.department = parse_id_selection(value),
                _ => {}
            }
        }
        Ok(criteria)
    }

    /// Criteria from optional CLI flag values.
    pub fn from_options(
        search: Option<&str>,
        status: Option<&str>,
        ai_type: Option<&str>,
        data_layer: Option<&str>,
        department: Option<&str>,
    ) -> Result<Self, FilterError> {
        let pairs = [
            ("search", search),
            ("status", status),
            ("ai_type", ai_type),
            ("data_layer", data_layer),
            ("department", department),
        ];
        Self::from_pairs(pairs.into_iter().filter_map(|(k, v)| Some((k, v?))))
    }

    /// Whether these criteria admit every use case.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.status.is_all()
            && self.ai_type.is_all()
            && self.data_layer.is_all()
            && self.department.is_all()
    }

    /// Match on use-case fields only; the department constraint is ignored.
    pub fn matches_use_case(&self, use_case: &UseCase) -> bool {
        name_contains(&use_case.name, &self.search)
            && self.status.admits(&use_case.status)
            && self.ai_type.admits(use_case.ai_type.as_str())
            && self.data_layer.admits(use_case.data_layer.as_str())
    }

    pub fn matches(&self, entry: &Entry<'_>) -> bool {
        self.department.admits(entry.department.id.as_str())
            && self.matches_use_case(entry.use_case)
    }
}

fn name_contains(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

/// Entries admitted by `criteria`, in input order. May be empty.
pub fn filter_entries<'a, I>(entries: I, criteria: &FilterCriteria) -> Vec<Entry<'a>>
where
    I: IntoIterator<Item = Entry<'a>>,
{
    entries.into_iter().filter(|e| criteria.matches(e)).collect()
}

/// Use cases admitted by `criteria`, in input order. May be empty.
pub fn filter_use_cases<'a>(
    use_cases: &'a [UseCase],
    criteria: &FilterCriteria,
) -> Vec<&'a UseCase> {
    use_cases
        .iter()
        .filter(|uc| criteria.matches_use_case(uc))
        .collect()
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Accuracy,
    CostSavings,
    Revenue,
}

impl SortKey {
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        match raw.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "accuracy" => Ok(Self::Accuracy),
            "cost_savings" | "cost-savings" | "savings" => Ok(Self::CostSavings),
            "revenue" => Ok(Self::Revenue),
            _ => Err(FilterError::UnknownSortKey(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(FilterError::UnknownSortOrder(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sort {
    /// Read `sort` / `order` from `key=value` pairs; absent keys keep defaults.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut sort = Self::default();
        for (key, value) in pairs {
            match key {
                "sort" if !value.is_empty() => sort.key = SortKey::parse(value)?,
                "order" if !value.is_empty() => sort.order = SortOrder::parse(value)?,
                _ => {}
            }
        }
        Ok(sort)
    }

    fn compare(&self, a: &UseCase, b: &UseCase) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Accuracy => a.accuracy.total_cmp(&b.accuracy),
            SortKey::CostSavings => a.cost_savings.total_cmp(&b.cost_savings),
            SortKey::Revenue => a.revenue.total_cmp(&b.revenue),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Stable in-place sort.
pub fn sort_entries(entries: &mut [Entry<'_>], sort: Sort) {
    entries.sort_by(|a, b| sort.compare(a.use_case, b.use_case));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
