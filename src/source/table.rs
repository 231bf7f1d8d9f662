//! Extraction of the reference table from an HTML document.

use crate::errors::{AppError, AppResult};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Header row plus the raw cell strings of every data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Structural signature identifying the reference table among the page's tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSignature {
    pub selector: String,
    pub columns: usize,
}

impl TableSignature {
    pub fn new(selector: impl Into<String>, columns: usize) -> Self {
        Self {
            selector: selector.into(),
            columns,
        }
    }
}

/// Locate the first table matching `signature` and return its cells.
///
/// Returns `Ok(None)` when no table on the page matches; only an unparsable
/// selector is an error.
pub fn extract_table(html: &str, signature: &TableSignature) -> AppResult<Option<RawTable>> {
    let table_sel = parse_selector(&signature.selector)?;
    let th = parse_selector("th")?;
    let tr = parse_selector("tr")?;
    let td = parse_selector("td")?;

    let document = Html::parse_document(html);

    for table in document.select(&table_sel) {
        let headers: Vec<String> = table.select(&th).map(|h| cell_text(&h)).collect();
        if headers.len() != signature.columns {
            debug!(
                found = headers.len(),
                expected = signature.columns,
                "skipping table with wrong column count"
            );
            continue;
        }

        let mut rows = Vec::new();
        for row in table.select(&tr).skip(1) {
            let cells: Vec<String> = row.select(&td).map(|c| cell_text(&c)).collect();
            if cells.is_empty() {
                continue;
            }
            rows.push(cells);
        }

        debug!(columns = headers.len(), rows = rows.len(), "reference table located");
        return Ok(Some(RawTable { headers, rows }));
    }

    Ok(None)
}

fn parse_selector(selector: &str) -> AppResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| AppError::Config(format!("invalid table selector '{selector}': {e}")))
}

fn cell_text(element: &ElementRef<'_>) -> String {
    let mut raw = String::new();
    for piece in element.text() {
        raw.push_str(piece);
    }
    collapse_whitespace(&raw)
}

fn collapse_whitespace(input: &str) -> String {
    let mut buf = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space && !buf.is_empty() {
                buf.push(' ');
            }
            last_space = true;
        } else {
            buf.push(ch);
            last_space = false;
        }
    }
    buf.trim_end().to_string()
}
