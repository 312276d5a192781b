//! Common test utilities: read a produced workbook back into a simple
//! cell map for assertions.
//!
//! The readback is deliberately independent of the export writer: it walks
//! the ZIP entries and XML with quick-xml, resolving per-cell style indices
//! against the stylesheet to answer "is this cell highlighted / centered".
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::collections::{BTreeMap, HashSet};
use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use testsheet::cell_ref::parse_cell_ref;

/// One cell read back from the worksheet.
#[derive(Debug, Clone)]
pub struct ParsedCell {
    pub text: Option<String>,
    pub style: Option<u32>,
}

/// The single report sheet, parsed for assertions.
#[derive(Debug)]
pub struct ParsedSheet {
    /// Cells keyed by (row, col), 0-indexed.
    pub cells: BTreeMap<(u32, u32), ParsedCell>,
    /// cellXfs indices whose fill is the solid red highlight.
    pub highlight_xfs: HashSet<u32>,
    /// cellXfs indices with vertical="center" alignment.
    pub centered_xfs: HashSet<u32>,
    /// Declared column widths, in sheet order.
    pub col_widths: Vec<f64>,
}

impl ParsedSheet {
    pub fn text(&self, row: u32, col: u32) -> Option<&str> {
        self.cells.get(&(row, col)).and_then(|c| c.text.as_deref())
    }

    pub fn has_cell(&self, row: u32, col: u32) -> bool {
        self.cells.contains_key(&(row, col))
    }

    pub fn is_highlighted(&self, row: u32, col: u32) -> bool {
        self.cells
            .get(&(row, col))
            .and_then(|c| c.style)
            .is_some_and(|s| self.highlight_xfs.contains(&s))
    }

    pub fn is_centered(&self, row: u32, col: u32) -> bool {
        self.cells
            .get(&(row, col))
            .and_then(|c| c.style)
            .is_some_and(|s| self.centered_xfs.contains(&s))
    }

    /// Highest populated row index (0-indexed).
    pub fn max_row(&self) -> u32 {
        self.cells.keys().map(|(r, _)| *r).max().unwrap_or(0)
    }
}

/// Parse XLSX bytes produced by the export layer.
pub fn parse_report(data: &[u8]) -> ParsedSheet {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(data.to_vec())).expect("Failed to open ZIP archive");

    let styles = read_entry(&mut archive, "xl/styles.xml").unwrap_or_default();
    let sheet = read_entry(&mut archive, "xl/worksheets/sheet1.xml").expect("sheet1.xml present");

    let (highlight_xfs, centered_xfs) = parse_styles(&styles);
    let (cells, col_widths) = parse_sheet(&sheet);

    ParsedSheet {
        cells,
        highlight_xfs,
        centered_xfs,
        col_widths,
    }
}

/// List the entry names of the archive.
pub fn entry_names(data: &[u8]) -> Vec<String> {
    let archive =
        zip::ZipArchive::new(Cursor::new(data.to_vec())).expect("Failed to open ZIP archive");
    archive.file_names().map(ToString::to_string).collect()
}

fn read_entry<R: Read + std::io::Seek>(
    archive: &mut zip::ZipArchive<R>,
    name: &str,
) -> Option<String> {
    let mut entry = archive.by_name(name).ok()?;
    let mut text = String::new();
    entry.read_to_string(&mut text).ok()?;
    Some(text)
}

/// Extract highlight and centered xf index sets from styles.xml.
fn parse_styles(xml_text: &str) -> (HashSet<u32>, HashSet<u32>) {
    let mut reader = Reader::from_str(xml_text);

    let mut in_fills = false;
    let mut in_cell_xfs = false;
    let mut fill_idx: i64 = -1;
    let mut current_fill_solid = false;
    let mut red_fills: HashSet<u32> = HashSet::new();
    let mut xf_fills: Vec<u32> = Vec::new();
    let mut centered: HashSet<u32> = HashSet::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"fills" => in_fills = true,
                b"fill" if in_fills => {
                    fill_idx += 1;
                    current_fill_solid = false;
                }
                b"patternFill" if in_fills => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"patternType" && attr.value.as_ref() == b"solid" {
                            current_fill_solid = true;
                        }
                    }
                }
                b"fgColor" if current_fill_solid => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"rgb" && attr.value.as_ref() == b"FFFF0000" {
                            red_fills.insert(u32::try_from(fill_idx).unwrap_or(0));
                        }
                    }
                }
                b"cellXfs" => in_cell_xfs = true,
                b"xf" if in_cell_xfs => {
                    let mut fill_id = 0u32;
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"fillId" {
                            fill_id = std::str::from_utf8(&attr.value)
                                .unwrap_or("0")
                                .parse()
                                .unwrap_or(0);
                        }
                    }
                    xf_fills.push(fill_id);
                }
                b"alignment" if in_cell_xfs && !xf_fills.is_empty() => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"vertical" && attr.value.as_ref() == b"center" {
                            centered.insert(u32::try_from(xf_fills.len() - 1).unwrap());
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"fills" => in_fills = false,
                b"cellXfs" => in_cell_xfs = false,
                _ => {}
            },
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    let highlight = xf_fills
        .iter()
        .enumerate()
        .filter(|(_, fill)| red_fills.contains(fill))
        .map(|(idx, _)| u32::try_from(idx).unwrap())
        .collect();

    (highlight, centered)
}

/// Extract cells and column widths from a worksheet XML.
fn parse_sheet(xml_text: &str) -> (BTreeMap<(u32, u32), ParsedCell>, Vec<f64>) {
    let mut reader = Reader::from_str(xml_text);

    let mut cells: BTreeMap<(u32, u32), ParsedCell> = BTreeMap::new();
    let mut col_widths: Vec<f64> = Vec::new();

    let mut current: Option<((u32, u32), Option<u32>)> = None;
    let mut in_t = false;
    let mut saw_text = false;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"col" => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"width" {
                            if let Some(width) = std::str::from_utf8(&attr.value)
                                .ok()
                                .and_then(|s| s.parse::<f64>().ok())
                            {
                                col_widths.push(width);
                            }
                        }
                    }
                }
                b"c" => {
                    if let Some((pos, style)) = cell_attrs(e) {
                        cells.insert(pos, ParsedCell { text: None, style });
                    }
                }
                _ => {}
            },
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"c" => {
                    current = cell_attrs(e);
                    saw_text = false;
                    text.clear();
                }
                b"t" if current.is_some() => in_t = true,
                _ => {}
            },
            Ok(Event::Text(ref t)) if in_t => {
                saw_text = true;
                text.push_str(&t.unescape().unwrap_or_default());
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_t = false,
                b"c" => {
                    if let Some((pos, style)) = current.take() {
                        cells.insert(
                            pos,
                            ParsedCell {
                                text: saw_text.then(|| text.clone()),
                                style,
                            },
                        );
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    (cells, col_widths)
}

/// Read the `r` and `s` attributes of a `<c>` element.
fn cell_attrs(e: &quick_xml::events::BytesStart) -> Option<((u32, u32), Option<u32>)> {
    let mut position: Option<(u32, u32)> = None;
    let mut style: Option<u32> = None;

    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"r" => {
                let reference = std::str::from_utf8(&attr.value).ok()?;
                let (col, row) = parse_cell_ref(reference)?;
                position = Some((row, col));
            }
            b"s" => {
                style = std::str::from_utf8(&attr.value).ok().and_then(|s| s.parse().ok());
            }
            _ => {}
        }
    }

    position.map(|pos| (pos, style))
}
