//! Generates worksheet XML from a [`ReportGrid`].
//!
//! All values are written as inline strings — a write-once report has no
//! use for a shared string table.

use crate::cell_ref::{cell_ref, col_to_letter};
use crate::types::{GridCell, ReportGrid};

/// Style index for content cells (vertical center + wrap).
pub(crate) const XF_CONTENT: u32 = 1;
/// Style index for highlighted (missing-field) cells.
pub(crate) const XF_HIGHLIGHT: u32 = 2;

/// Narrowest and widest auto-fit column widths, in Excel character units.
const MIN_COL_WIDTH: f64 = 8.43;
const MAX_COL_WIDTH: f64 = 80.0;

/// Write a complete worksheet XML string.
pub(crate) fn write_sheet_xml(grid: &ReportGrid) -> String {
    let col_count = u32::try_from(grid.columns.len()).unwrap_or(0);
    let row_count = u32::try_from(grid.rows.len()).unwrap_or(0) + 1;

    let mut out = String::with_capacity(4096);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    out.push('\n');
    out.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );
    out.push('\n');

    // <dimension>
    if col_count > 0 {
        let end_col = col_to_letter(col_count.saturating_sub(1));
        out.push_str(&format!("<dimension ref=\"A1:{end_col}{row_count}\"/>\n"));
    }

    // <cols> — approximate auto-fit from cell text
    if col_count > 0 {
        out.push_str("<cols>\n");
        for (idx, width) in column_widths(grid).iter().enumerate() {
            let col1 = idx + 1; // XLSX is 1-based
            out.push_str(&format!(
                "<col min=\"{col1}\" max=\"{col1}\" width=\"{width:.2}\" customWidth=\"1\"/>\n"
            ));
        }
        out.push_str("</cols>\n");
    }

    // <sheetData>
    out.push_str("<sheetData>\n");
    write_header_row(&mut out, grid);
    for (idx, row) in grid.rows.iter().enumerate() {
        let row_index = u32::try_from(idx).unwrap_or(u32::MAX).saturating_add(1);
        out.push_str(&format!("<row r=\"{}\">", row_index + 1));
        for (col_idx, cell) in row.cells.iter().enumerate() {
            let col = u32::try_from(col_idx).unwrap_or(u32::MAX);
            write_cell(&mut out, row_index, col, cell);
        }
        out.push_str("</row>\n");
    }
    out.push_str("</sheetData>\n");

    out.push_str("</worksheet>");
    out
}

/// Header row: column titles at row 1.
fn write_header_row(out: &mut String, grid: &ReportGrid) {
    out.push_str("<row r=\"1\">");
    for (col_idx, title) in grid.columns.iter().enumerate() {
        let col = u32::try_from(col_idx).unwrap_or(u32::MAX);
        let cell = GridCell::text(title.as_str());
        write_cell(out, 0, col, &cell);
    }
    out.push_str("</row>\n");
}

/// Write a single `<c>` element. Blank, unhighlighted cells are skipped
/// entirely (sparse sheet); highlighted empty cells carry only a style.
fn write_cell(out: &mut String, row: u32, col: u32, cell: &GridCell) {
    if cell.is_blank() {
        return;
    }

    let style = if cell.highlighted { XF_HIGHLIGHT } else { XF_CONTENT };
    let reference = cell_ref(row, col);

    if cell.text.is_empty() {
        out.push_str(&format!("<c r=\"{reference}\" s=\"{style}\"/>"));
        return;
    }

    out.push_str(&format!(
        "<c r=\"{reference}\" s=\"{style}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
        xml_escape(&cell.text)
    ));
}

/// Per-column widths from the longest text line, clamped to sane bounds.
fn column_widths(grid: &ReportGrid) -> Vec<f64> {
    grid.columns
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let mut chars = title.chars().count();
            for row in &grid.rows {
                if let Some(cell) = row.cells.get(idx) {
                    for line in cell.text.lines() {
                        chars = chars.max(line.chars().count());
                    }
                }
            }
            #[allow(clippy::cast_precision_loss)]
            let width = chars as f64 + 2.0;
            width.clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
        })
        .collect()
}

/// Minimal XML escaping for text content.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
