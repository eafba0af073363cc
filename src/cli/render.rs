//! Terminal and CSV rendering of resolved views.
//!
//! The same [`View`] the dashboard paints as SVG is printed here: stat cards
//! as aligned key/value lines, charts as horizontal ASCII bars, tables as
//! padded columns.

use std::borrow::Cow;

use colored::Colorize;

use crate::analytics::{Point, X};
use crate::view::{Chart, ChartKind, StatCard, Table, View, Widget};

/// Width of the longest ASCII bar.
const BAR_WIDTH: usize = 32;
/// Widest a table column may grow before cells are truncated.
const MAX_COLUMN: usize = 28;

// ---------------------------------------------------------------------------
// Table output
// ---------------------------------------------------------------------------

/// Print a view to stdout.
pub fn print_view(view: &View) {
    let heading = match &view.parent {
        Some(parent) => format!("{} / {}", parent.name, view.title),
        None => view.title.clone(),
    };
    println!("{}", heading.bold().cyan());
    println!("{}", "=".repeat(60));

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|t| {
            if t.id == view.tab {
                format!("[{}]", t.title).bold().to_string()
            } else {
                t.title.dimmed().to_string()
            }
        })
        .collect();
    println!("  {}", tabs.join("  "));
    println!();

    for widget in &view.widgets {
        match widget {
            Widget::Stats { cards } => print_cards(cards),
            Widget::Chart(chart) => print_chart(chart),
            Widget::Table(table) => print_table(table),
        }
        println!();
    }
}

fn print_cards(cards: &[StatCard]) {
    let width = cards.iter().map(|c| c.label.len()).max().unwrap_or(0);
    for card in cards {
        let label = format!("{:<width$}", card.label);
        match &card.hint {
            Some(hint) => println!("  {} {}  {}", label.bold(), card.value, hint.dimmed()),
            None => println!("  {} {}", label.bold(), card.value),
        }
    }
}

fn print_chart(chart: &Chart) {
    println!("{}", chart.title.bold().cyan());
    if chart.series.is_empty() {
        println!("  {}", "No data".dimmed());
        return;
    }

    if chart.kind == ChartKind::Scatter {
        for point in &chart.series {
            println!(
                "  {:<28} x={:<8.1} y={:.1}",
                truncate(point.label.as_deref().unwrap_or(""), 28),
                x_value(point),
                point.y,
            );
        }
        return;
    }

    let max = chart.series.iter().map(|p| p.y).fold(0.0_f64, f64::max);
    for point in &chart.series {
        println!(
            "  {:<20} {:<width$} {:.1}",
            truncate(&x_label(point), 20),
            bar(point.y, max, BAR_WIDTH),
            point.y,
            width = BAR_WIDTH,
        );
    }
}

pub(crate) fn print_table(table: &Table) {
    println!("{}", table.title.bold().cyan());
    if let Some(message) = &table.empty_message {
        println!("  {}", message.yellow());
        return;
    }

    let widths: Vec<usize> = (0..table.columns.len())
        .map(|i| {
            let cells = table.rows.iter().filter_map(|r| r.get(i));
            std::iter::once(&table.columns[i])
                .chain(cells)
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN)
        })
        .collect();

    let header = format_row(&table.columns, &widths);
    println!("  {}", header.bold());
    println!("  {}", "-".repeat(header.chars().count()));

    for (i, row) in table.rows.iter().enumerate() {
        let line = format_row(row, &widths);
        if i % 2 == 0 {
            println!("  {line}");
        } else {
            println!("  {}", line.dimmed());
        }
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:<w$}", truncate(cell, w)))
        .collect::<Vec<_>>()
        .join("  ")
}

// ---------------------------------------------------------------------------
// CSV output
// ---------------------------------------------------------------------------

/// Every table in the view as CSV, separated by blank lines.
pub fn view_csv(view: &View) -> String {
    let tables: Vec<String> = view
        .widgets
        .iter()
        .filter_map(|w| match w {
            Widget::Table(table) => Some(table_csv(table)),
            _ => None,
        })
        .collect();
    tables.join("\n")
}

pub fn table_csv(table: &Table) -> String {
    let mut out = String::new();
    push_csv_row(&mut out, &table.columns);
    for row in &table.rows {
        push_csv_row(&mut out, row);
    }
    out
}

fn push_csv_row(out: &mut String, cells: &[String]) {
    let fields: Vec<Cow<'_, str>> = cells.iter().map(|c| csv_field(c)).collect();
    out.push_str(&fields.join(","));
    out.push('\n');
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn x_label(point: &Point) -> String {
    match &point.x {
        X::Label(label) => label.clone(),
        X::Value(v) => format!("{v:.1}"),
    }
}

fn x_value(point: &Point) -> f64 {
    match point.x {
        X::Value(v) => v,
        X::Label(_) => 0.0,
    }
}

/// Horizontal bar scaled so `max` fills `width` cells.
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "#".repeat(cells.clamp(1, width))
}

/// Truncate a string to `max_len` characters, appending "…" if truncated.
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hell…");
        assert_eq!(truncate("ab", 2), "ab");
        assert_eq!(truncate("Überwachung", 4), "Übe…");
    }

    #[test]
    fn bar_scales_to_max() {
        assert_eq!(bar(10.0, 10.0, 8), "########");
        assert_eq!(bar(5.0, 10.0, 8), "####");
        assert_eq!(bar(0.0, 10.0, 8), "");
        assert_eq!(bar(0.01, 10.0, 8), "#");
        assert_eq!(bar(3.0, 0.0, 8), "");
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn table_csv_has_header_and_rows() {
        let table = Table::new(
            "Departments",
            &["Department", "Savings"],
            vec![
                vec!["Fraud Detection".to_string(), "$45.2M".to_string()],
                vec!["Ops, Back Office".to_string(), "-".to_string()],
            ],
        );
        assert_eq!(
            table_csv(&table),
            "Department,Savings\nFraud Detection,$45.2M\n\"Ops, Back Office\",-\n"
        );
    }
}
