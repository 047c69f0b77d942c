//! Export formats and CSV layouts.

use std::fmt;
use std::str::FromStr;

use ukclean_model::ProcessingMode;

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    /// Download name for an export of `source_name`: `contacts.csv` becomes
    /// `contacts_cleaned.json` for a JSON export.
    pub fn file_name(self, source_name: &str) -> String {
        let stem = source_name
            .rsplit_once('.')
            .map_or(source_name, |(stem, _)| stem);
        let stem = if stem.is_empty() { "export" } else { stem };
        format!("{stem}_cleaned.{}", self.as_str())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Column layout of a CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvLayout {
    /// One phone column per row: `Row,Phone Number,…`.
    #[default]
    SingleColumn,
    /// One line per validated cell, naming its source column.
    PerField,
}

impl CsvLayout {
    pub fn for_mode(mode: &ProcessingMode) -> Self {
        match mode {
            ProcessingMode::PhoneColumn => Self::SingleColumn,
            ProcessingMode::AllColumns | ProcessingMode::Fields(_) => Self::PerField,
        }
    }

    pub(crate) fn header(self) -> &'static [&'static str] {
        match self {
            Self::SingleColumn => &[
                "Row",
                "Phone Number",
                "Is Valid",
                "Detected Type",
                "Fixed Value",
                "Error",
            ],
            Self::PerField => &[
                "Row",
                "Column",
                "Original Value",
                "Is Valid",
                "Detected Type",
                "Fixed Value",
                "Error",
            ],
        }
    }
}
