//! XLSX export pipeline.
//!
//! Renders a [`ReportGrid`] into a complete workbook package: one worksheet
//! named `Sheet1`, inline strings, a red solid fill on highlighted cells,
//! vertical centering, and approximate auto-fit column widths.

pub(crate) mod package;
pub(crate) mod sheet_writer;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::types::ReportGrid;

/// Default label in the timestamped report file name.
pub const DEFAULT_LABEL: &str = "Smoke";

/// Render a grid to XLSX bytes.
///
/// # Errors
/// Returns an error if the ZIP archive cannot be written.
pub fn write_xlsx(grid: &ReportGrid) -> Result<Vec<u8>> {
    package::build_package(grid)
}

/// Default output name: `"<yyyy-MM-dd HH.mm.ss> <label>.xlsx"`.
///
/// The timestamp is a parameter so the core stays deterministic; only the
/// caller decides what "now" is.
#[must_use]
pub fn report_file_name(now: &DateTime<Local>, label: &str) -> String {
    format!("{} {}.xlsx", now.format("%Y-%m-%d %H.%M.%S"), label)
}
