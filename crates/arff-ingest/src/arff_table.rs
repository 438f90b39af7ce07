//! ARFF parsing into a raw string table.
//!
//! The header is scanned line by line; the data section is handed to the
//! `csv` reader, since ARFF data rows are comma-separated records with
//! optional quoting. Cells come out as unquoted text with the `?` missing
//! marker mapped to `None`; typing happens later in [`crate::frame_builder`].

use std::path::Path;

use anyhow::{Context, Result, bail};

use arff_model::{
    ArffHeader, Attribute, AttributeType, is_attribute_line, is_comment_line, is_data_line,
    is_relation_line, split_declaration, unquote,
};

/// A parsed ARFF file: header plus raw data cells.
///
/// Every row has exactly `header.width()` cells; a cell is `None` where the
/// source held the missing marker.
#[derive(Debug, Clone)]
pub struct ArffTable {
    pub header: ArffHeader,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ArffTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.header.width()
    }
}

/// Read and parse an ARFF file.
///
/// The whole file is decoded as UTF-8 up front; invalid bytes are fatal for
/// the file. Header errors (malformed declarations, unsupported types, a
/// missing `@data` directive) and data errors (sparse rows, wrong field
/// counts) are fatal as well.
pub fn read_arff_table(path: &Path) -> Result<ArffTable> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let text =
        String::from_utf8(bytes).with_context(|| format!("decode utf-8: {}", path.display()))?;
    parse_arff_text(&text).with_context(|| format!("parse {}", path.display()))
}

/// Parse ARFF text that has already been decoded.
pub fn parse_arff_text(text: &str) -> Result<ArffTable> {
    let mut lines = text.lines().enumerate();
    let mut header = ArffHeader::default();
    let mut saw_data = false;

    for (index, line) in lines.by_ref() {
        if is_comment_line(line) || line.trim().is_empty() {
            continue;
        }
        if is_relation_line(line) {
            header.relation = relation_name(line);
            continue;
        }
        if is_data_line(line) {
            saw_data = true;
            break;
        }
        if is_attribute_line(line) {
            let Some(decl) = split_declaration(line) else {
                bail!("line {}: malformed attribute declaration", index + 1);
            };
            let ty = AttributeType::parse(decl.spec)
                .with_context(|| format!("line {}: attribute {}", index + 1, decl.name))?;
            header
                .attributes
                .push(Attribute::new(unquote(decl.name), ty));
            continue;
        }
        bail!("line {}: unexpected content before @data", index + 1);
    }

    if !saw_data {
        bail!("missing @data section");
    }
    if header.attributes.is_empty() {
        bail!("no attribute declarations before @data");
    }

    let rows = parse_data_section(lines, header.width())?;
    Ok(ArffTable { header, rows })
}

fn relation_name(line: &str) -> String {
    let trimmed = line.trim();
    match trimmed.find(char::is_whitespace) {
        Some(idx) => unquote(trimmed[idx..].trim()).to_string(),
        None => String::new(),
    }
}

fn parse_data_section<'a>(
    lines: impl Iterator<Item = (usize, &'a str)>,
    width: usize,
) -> Result<Vec<Vec<Option<String>>>> {
    let mut section = String::new();
    for (index, line) in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment_line(line) {
            continue;
        }
        if trimmed.starts_with('{') {
            bail!("line {}: sparse ARFF data is not supported", index + 1);
        }
        section.push_str(line);
        section.push('\n');
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(section.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("data row {}", index + 1))?;
        if record.len() != width {
            bail!(
                "data row {}: expected {} fields, found {}",
                index + 1,
                width,
                record.len()
            );
        }
        let row: Vec<Option<String>> = record.iter().map(parse_cell).collect();
        rows.push(row);
    }
    Ok(rows)
}

fn parse_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed == "?" {
        return None;
    }
    Some(unquote(trimmed).to_string())
}
