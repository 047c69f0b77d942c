//! Row pipeline: validate targeted cells and aggregate a file-level report.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, info_span, trace};
use ukclean_ingest::{FileKind, parse, read_source};
use ukclean_model::{
    DetectedValidationResult, FileProcessingResult, ProcessedRow, ProcessingOptions,
    ProcessingSummary,
};

use crate::columns::{ColumnTarget, plan_columns};
use crate::error::{ProcessError, Result};

/// Reads, parses and processes a CSV or plain-text file.
pub fn process_file(path: &Path, options: &ProcessingOptions) -> Result<FileProcessingResult> {
    let source = read_source(path, options.max_file_bytes)?;
    process_text(&source.content, source.kind, &source.name, options)
}

/// Parses and processes pasted or already-loaded text.
pub fn process_text(
    content: &str,
    kind: FileKind,
    file_name: &str,
    options: &ProcessingOptions,
) -> Result<FileProcessingResult> {
    let grid = parse(content, kind)?;
    process_rows(&grid, file_name, options)
}

/// Validates a parsed grid whose first row is the header.
///
/// Rows shorter than the furthest targeted column are noted in
/// `summary.errors` and still processed for the columns they have.
pub fn process_rows(
    grid: &[Vec<String>],
    file_name: &str,
    options: &ProcessingOptions,
) -> Result<FileProcessingResult> {
    let Some((header, data)) = grid.split_first() else {
        return Err(ProcessError::EmptyGrid);
    };
    let span = info_span!("process", file_name = %file_name, data_rows = data.len());
    let _guard = span.enter();
    let start = Instant::now();

    let targets = plan_columns(header, &options.mode, options.phone_format)?;
    debug!(
        columns = ?targets.iter().map(|target| target.header.as_str()).collect::<Vec<_>>(),
        "selected columns"
    );
    let required = targets
        .iter()
        .map(|target| target.index + 1)
        .max()
        .unwrap_or(0);

    let mut processed_rows = Vec::with_capacity(data.len() + 1);
    let mut errors = Vec::new();
    if options.include_header {
        processed_rows.push(header_row(header, &targets));
    }
    for (offset, cells) in data.iter().enumerate() {
        let row_number = offset + 1;
        if cells.len() < required {
            let message = format!(
                "Row {row_number}: expected at least {required} columns, found {}",
                cells.len()
            );
            debug!(row = row_number, found = cells.len(), required, "short row");
            errors.push(message);
        }
        processed_rows.push(process_row(row_number, cells, &targets, options));
    }

    let summary = summarize(&processed_rows, errors);
    info!(
        total_valid = summary.total_valid,
        total_invalid = summary.total_invalid,
        total_fixed = summary.total_fixed,
        row_errors = summary.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "processing complete"
    );
    Ok(FileProcessingResult {
        file_name: file_name.to_string(),
        total_rows: grid.len(),
        processed_rows,
        summary,
    })
}

fn process_row(
    row_number: usize,
    cells: &[String],
    targets: &[ColumnTarget],
    options: &ProcessingOptions,
) -> ProcessedRow {
    let mut row = ProcessedRow::new(row_number, cells);
    for target in targets {
        let Some(cell) = cells.get(target.index) else {
            continue;
        };
        if cell.trim().is_empty() {
            continue;
        }
        let result = target
            .validate(cell, options.phone_format)
            .with_source(target.header.as_str(), cell.as_str());
        trace!(
            row = row_number,
            column = %target.header,
            detected_type = %result.detected_type,
            is_valid = result.is_valid(),
            "validated cell"
        );
        row.validation_results.push(result);
    }
    row
}

fn header_row(header: &[String], targets: &[ColumnTarget]) -> ProcessedRow {
    let mut row = ProcessedRow::new(0, header);
    row.validation_results = targets
        .iter()
        .map(|target| {
            DetectedValidationResult::header(target.header.as_str())
                .with_source(target.header.as_str(), target.header.as_str())
        })
        .collect();
    row
}

/// Counts outcomes over every non-header result.
pub fn summarize(rows: &[ProcessedRow], errors: Vec<String>) -> ProcessingSummary {
    let mut summary = ProcessingSummary {
        errors,
        ..ProcessingSummary::default()
    };
    let results = rows
        .iter()
        .flat_map(|row| &row.validation_results)
        .filter(|result| !result.is_header());
    for result in results {
        if result.is_valid() {
            summary.total_valid += 1;
            if result.result.was_rewritten() {
                summary.total_fixed += 1;
            }
        } else {
            summary.total_invalid += 1;
        }
    }
    summary
}
