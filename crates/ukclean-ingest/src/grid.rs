//! Splitting raw text into a grid of cells.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::FileKind;

/// Tabs or runs of two or more spaces separate plain-text columns.
static TEXT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+| {2,}").expect("Invalid text separator regex"));

/// Rows of trimmed cells; the first row is the header.
pub type Grid = Vec<Vec<String>>;

/// Parses content into rows, skipping blank lines.
///
/// Fails with [`IngestError::EmptyInput`] when no non-blank line exists.
pub fn parse(content: &str, kind: FileKind) -> Result<Grid> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let grid: Grid = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match kind {
            FileKind::Csv => parse_csv_line(line),
            FileKind::Text => split_text_line(line),
        })
        .collect();
    if grid.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    debug!(
        kind = kind.as_str(),
        rows = grid.len(),
        columns = grid[0].len(),
        "parsed grid"
    );
    Ok(grid)
}

/// Splits one CSV line on commas outside quotes.
///
/// A `"` toggles the in-quotes state; a doubled `""` inside quotes is a
/// literal quote. Quoted fields never span lines.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Splits one plain-text line on tabs or runs of two or more spaces.
pub fn split_text_line(line: &str) -> Vec<String> {
    TEXT_SEPARATOR
        .split(line.trim())
        .map(|cell| cell.trim().to_string())
        .collect()
}
