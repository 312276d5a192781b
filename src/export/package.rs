//! Packages the report into a complete XLSX (OPC) archive.
//!
//! The workbook is built from scratch: content types, relationships, the
//! workbook part, a minimal stylesheet, and one worksheet.

use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::error::Result;
use crate::types::ReportGrid;

use super::sheet_writer::write_sheet_xml;

/// ARGB fill color for highlighted cells.
pub(crate) const HIGHLIGHT_ARGB: &str = "FFFF0000";

/// Assemble the full archive.
pub(crate) fn build_package(grid: &ReportGrid) -> Result<Vec<u8>> {
    let cursor = Cursor::new(Vec::new());
    let mut writer = ZipWriter::new(cursor);
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    writer.start_file("[Content_Types].xml", options)?;
    writer.write_all(content_types_xml().as_bytes())?;

    writer.start_file("_rels/.rels", options)?;
    writer.write_all(root_rels_xml().as_bytes())?;

    writer.start_file("xl/workbook.xml", options)?;
    writer.write_all(workbook_xml().as_bytes())?;

    writer.start_file("xl/_rels/workbook.xml.rels", options)?;
    writer.write_all(workbook_rels_xml().as_bytes())?;

    writer.start_file("xl/styles.xml", options)?;
    writer.write_all(styles_xml().as_bytes())?;

    writer.start_file("xl/worksheets/sheet1.xml", options)?;
    writer.write_all(write_sheet_xml(grid).as_bytes())?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn content_types_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#);
    xml.push_str(r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#);
    xml.push_str("</Types>");
    xml
}

fn root_rels_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#);
    xml.push_str("</Relationships>");
    xml
}

fn workbook_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
    xml.push_str(r#"<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>"#);
    xml.push_str("</workbook>");
    xml
}

fn workbook_rels_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#);
    xml.push_str(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#);
    xml.push_str("</Relationships>");
    xml
}

/// Stylesheet with three cell formats:
/// - xf 0: default
/// - xf 1: content (vertical center, wrap for multi-line cells)
/// - xf 2: highlight (red solid fill, same alignment)
fn styles_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    xml.push_str(r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>"#);

    // fills 0 and 1 are reserved (none, gray125); 2 is the highlight fill
    xml.push_str(r#"<fills count="3">"#);
    xml.push_str(r#"<fill><patternFill patternType="none"/></fill>"#);
    xml.push_str(r#"<fill><patternFill patternType="gray125"/></fill>"#);
    xml.push_str(&format!(
        r#"<fill><patternFill patternType="solid"><fgColor rgb="{HIGHLIGHT_ARGB}"/></patternFill></fill>"#
    ));
    xml.push_str("</fills>");

    xml.push_str(r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#);
    xml.push_str(r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#);

    xml.push_str(r#"<cellXfs count="3">"#);
    xml.push_str(r#"<xf fontId="0" fillId="0" borderId="0"/>"#);
    xml.push_str(r#"<xf fontId="0" fillId="0" borderId="0" applyAlignment="1"><alignment vertical="center" wrapText="1"/></xf>"#);
    xml.push_str(r#"<xf fontId="0" fillId="2" borderId="0" applyFill="1" applyAlignment="1"><alignment vertical="center" wrapText="1"/></xf>"#);
    xml.push_str("</cellXfs>");

    xml.push_str(r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#);
    xml.push_str("</styleSheet>");
    xml
}
