//! Presentation layout: the widgets a view is made of.

use serde::Serialize;

use crate::analytics::Point;

/// Empty-table message for filtered listings.
pub const NO_RESULTS: &str = "No use cases match the current filters.";

/// Empty-table message when nothing was filtered out.
pub const NO_DATA: &str = "Nothing to show yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Radar,
    Pie,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            hint: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<Point>,
}

impl Chart {
    pub fn new(kind: ChartKind, title: impl Into<String>, series: Vec<Point>) -> Self {
        Self {
            kind,
            title: title.into(),
            series,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Per-row navigation targets (`#/...` routes), parallel to `rows`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    /// Set exactly when `rows` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        let empty_message = rows.is_empty().then(|| NO_DATA.to_string());
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            links: Vec::new(),
            empty_message,
        }
    }

    /// Replace the message shown when the table has no rows.
    pub fn when_empty(mut self, message: impl Into<String>) -> Self {
        if self.rows.is_empty() {
            self.empty_message = Some(message.into());
        }
        self
    }

    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    Stats { cards: Vec<StatCard> },
    Chart(Chart),
    Table(Table),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_carries_generic_message() {
        let table = Table::new("Use Cases", &["Name"], Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.empty_message.as_deref(), Some(NO_DATA));

        let table = Table::new("Use Cases", &["Name"], vec![vec!["x".to_string()]]);
        assert!(table.empty_message.is_none());
    }

    #[test]
    fn when_empty_only_applies_to_empty_tables() {
        let table = Table::new("Use Cases", &["Name"], Vec::new()).when_empty(NO_RESULTS);
        assert_eq!(table.empty_message.as_deref(), Some(NO_RESULTS));

        let table = Table::new("Use Cases", &["Name"], vec![vec!["x".to_string()]])
            .when_empty(NO_RESULTS);
        assert!(table.empty_message.is_none());
    }

    #[test]
    fn widget_is_internally_tagged() {
        let widget = Widget::Chart(Chart::new(ChartKind::Pie, "Status", Vec::new()));
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["widget"], "chart");
        assert_eq!(json["kind"], "pie");
    }
}
