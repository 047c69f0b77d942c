use serde::{Deserialize, Serialize};

use crate::validation::DetectedValidationResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedRow {
    /// 1-based position among data rows (the header is row 0).
    pub row_number: usize,
    /// Raw cells of the source row joined with commas.
    pub original_data: String,
    pub validation_results: Vec<DetectedValidationResult>,
}

impl ProcessedRow {
    pub fn new(row_number: usize, cells: &[String]) -> Self {
        Self {
            row_number,
            original_data: cells.join(","),
            validation_results: Vec::new(),
        }
    }

    pub fn is_header(&self) -> bool {
        !self.validation_results.is_empty()
            && self
                .validation_results
                .iter()
                .all(DetectedValidationResult::is_header)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    pub total_valid: usize,
    pub total_invalid: usize,
    /// Valid results whose canonical form differs from the cleaned value.
    pub total_fixed: usize,
    /// Row-level problems (short rows and similar); never per-cell failures.
    pub errors: Vec<String>,
}

impl ProcessingSummary {
    pub fn total_results(&self) -> usize {
        self.total_valid + self.total_invalid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileProcessingResult {
    pub file_name: String,
    /// Number of non-blank source lines, header included.
    pub total_rows: usize,
    pub processed_rows: Vec<ProcessedRow>,
    pub summary: ProcessingSummary,
}

impl FileProcessingResult {
    /// Iterates every non-header result in row order.
    pub fn results(&self) -> impl Iterator<Item = (&ProcessedRow, &DetectedValidationResult)> {
        self.processed_rows.iter().flat_map(|row| {
            row.validation_results
                .iter()
                .filter(|result| !result.is_header())
                .map(move |result| (row, result))
        })
    }
}
