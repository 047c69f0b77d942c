//! CSV rendering of a processing report.
//!
//! The header line is written plain. On data lines the row number stays bare
//! and every other field is double-quoted, numeric-looking or not.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;
use ukclean_model::{DetectedValidationResult, FileProcessingResult};

use crate::error::Result;
use crate::format::CsvLayout;

/// Writes `result` as CSV in the given layout. Header sentinel results are
/// skipped.
pub fn write_csv<W: Write>(
    result: &FileProcessingResult,
    layout: CsvLayout,
    mut writer: W,
) -> Result<()> {
    let mut header = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(&mut writer);
    header.write_record(layout.header())?;
    header.flush()?;
    drop(header);

    // Text fields of one line at a time; the row number is prepended bare.
    let mut fields = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    let mut written = 0usize;
    let mut emitted = 0usize;
    for (row, cell) in result.results() {
        match layout {
            CsvLayout::SingleColumn => fields.write_record(single_column_fields(cell))?,
            CsvLayout::PerField => fields.write_record(per_field_fields(cell))?,
        }
        fields.flush()?;
        write!(writer, "{},", row.row_number)?;
        let buffered = fields.get_ref();
        writer.write_all(&buffered[emitted..])?;
        emitted = buffered.len();
        written += 1;
    }
    writer.flush()?;
    debug!(file_name = %result.file_name, ?layout, records = written, "wrote CSV export");
    Ok(())
}

/// Renders `result` as CSV into a byte buffer.
pub fn csv_bytes(result: &FileProcessingResult, layout: CsvLayout) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(result, layout, &mut buffer)?;
    Ok(buffer)
}

fn single_column_fields(cell: &DetectedValidationResult) -> [String; 5] {
    [
        source_text(cell).to_string(),
        cell.is_valid().to_string(),
        cell.detected_type.to_string(),
        cell.fixed().unwrap_or_default().to_string(),
        cell.error().unwrap_or_default().to_string(),
    ]
}

fn per_field_fields(cell: &DetectedValidationResult) -> [String; 6] {
    [
        cell.column.clone().unwrap_or_default(),
        source_text(cell).to_string(),
        cell.is_valid().to_string(),
        cell.detected_type.to_string(),
        cell.fixed().unwrap_or_default().to_string(),
        cell.error().unwrap_or_default().to_string(),
    ]
}

/// The raw cell when known, otherwise the cleaned value.
fn source_text(cell: &DetectedValidationResult) -> &str {
    cell.original.as_deref().unwrap_or(&cell.result.value)
}
