//! Portfolio analytics: aggregation, filtering, chart series, and filler
//! metrics. All functions are pure over borrowed catalog data.

pub mod aggregate;
pub mod filler;
pub mod filter;
pub mod series;

pub use aggregate::{
    DepartmentSummary, PortfolioSummary, StatusCounts, Summary, portfolio_summary, summarize,
};
pub use filler::{Filler, FillerMetrics};
pub use filter::{
    FilterCriteria, Selection, Sort, SortKey, SortOrder, filter_entries, filter_use_cases,
    sort_entries,
};
pub use series::{Point, X};
