//! Turns metadata records into the sorted, highlight-flagged report grid.
//!
//! Layout for parameterized groups is flat: one row per expanded case, so
//! downstream consumers see one row per physical test execution.

use crate::types::{Column, GridCell, GridRow, ReportGrid, TestCaseRecord, REPORT_COLUMNS};

/// Assemble the grid: one row per plain record (missing fields highlighted),
/// then one row per expanded case of each parameterized group, then a stable
/// ascending lexicographic sort on the `Test` column.
#[must_use]
pub fn assemble(plain: &[TestCaseRecord], groups: &[Vec<TestCaseRecord>]) -> ReportGrid {
    let expanded = groups.iter().map(Vec::len).sum::<usize>();
    let mut rows: Vec<GridRow> = Vec::with_capacity(plain.len() + expanded);

    for record in plain {
        rows.push(record_row(record, true));
    }
    for group in groups {
        for record in group {
            rows.push(record_row(record, false));
        }
    }

    // Vec::sort_by is stable, so equal test names keep pre-sort order.
    rows.sort_by(|a, b| a.test_name().cmp(b.test_name()));

    ReportGrid {
        columns: REPORT_COLUMNS.iter().map(|c| c.title().to_string()).collect(),
        rows,
        sort_column: Column::Test,
    }
}

/// Build one row in fixed column order.
///
/// `highlight_missing` marks absent optional fields; it is set for plain
/// cases only — expanded cases render absent values as blank cells.
/// Identity-derived cells (`Class`, `Test`) never highlight.
fn record_row(record: &TestCaseRecord, highlight_missing: bool) -> GridRow {
    let cells = REPORT_COLUMNS
        .iter()
        .map(|column| match column {
            Column::TestCaseId => optional_cell(record.test_case_id.as_deref(), highlight_missing),
            Column::Class => GridCell::text(record.class_name.as_str()),
            Column::Test => GridCell::text(record.test_name.as_str()),
            Column::Category => {
                if record.categories.is_empty() {
                    absent_cell(highlight_missing)
                } else {
                    GridCell::text(record.categories.join(", "))
                }
            }
            Column::Priority => optional_cell(record.priority.as_deref(), highlight_missing),
            Column::Property => {
                if record.properties.is_empty() {
                    absent_cell(highlight_missing)
                } else {
                    let lines: Vec<String> = record
                        .properties
                        .iter()
                        .map(|p| format!("{} -> {}", p.key, p.value))
                        .collect();
                    GridCell::text(lines.join("\n"))
                }
            }
            Column::Description => optional_cell(record.description.as_deref(), highlight_missing),
        })
        .collect();

    GridRow { cells }
}

fn optional_cell(value: Option<&str>, highlight_missing: bool) -> GridCell {
    match value {
        Some(v) => GridCell::text(v),
        None => absent_cell(highlight_missing),
    }
}

fn absent_cell(highlight: bool) -> GridCell {
    if highlight {
        GridCell::missing()
    } else {
        GridCell::default()
    }
}
