//! Exports of field cleaning results.
//!
//! - **CSV**: one line per validated cell, in a single phone-column layout or
//!   a per-field layout that names the source column
//! - **JSON**: the full [`FileProcessingResult`], pretty-printed
//!
//! [`FileProcessingResult`]: ukclean_model::FileProcessingResult

mod csv_export;
mod error;
mod format;
mod json_export;

use std::io::Write;

use ukclean_model::FileProcessingResult;

pub use csv_export::{csv_bytes, write_csv};
pub use error::{ReportError, Result};
pub use format::{CsvLayout, ExportFormat};
pub use json_export::{json_bytes, write_json};

/// Writes `result` in `format`; `layout` only applies to CSV.
pub fn export<W: Write>(
    result: &FileProcessingResult,
    format: ExportFormat,
    layout: CsvLayout,
    writer: W,
) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(result, layout, writer),
        ExportFormat::Json => write_json(result, writer),
    }
}

/// Renders `result` in `format` into a byte buffer.
pub fn export_bytes(
    result: &FileProcessingResult,
    format: ExportFormat,
    layout: CsvLayout,
) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    export(result, format, layout, &mut buffer)?;
    Ok(buffer)
}
