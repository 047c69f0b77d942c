//! Configuration options for batch processing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::field::{FieldType, PhoneFormat};

/// Header keywords that identify a phone column, tried in order.
pub const PHONE_COLUMN_KEYWORDS: &[&str] = &["phone", "mobile", "telephone", "tel", "number"];

/// One explicitly selected column, optionally pinned to a field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelection {
    /// Header name, matched case-insensitively.
    pub column: String,
    /// Declared type; when absent the column name is resolved as a type name.
    pub field_type: Option<FieldType>,
}

impl FieldSelection {
    pub fn column(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            field_type: None,
        }
    }

    pub fn typed(column: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            column: column.into(),
            field_type: Some(field_type),
        }
    }
}

impl FromStr for FieldSelection {
    type Err = ModelError;

    /// Parses `COLUMN` or `COLUMN=TYPE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidFieldSelection(s.to_string());
        match s.split_once('=') {
            Some((column, type_name)) => {
                let column = column.trim();
                if column.is_empty() {
                    return Err(invalid());
                }
                let field_type = type_name.parse::<FieldType>()?;
                Ok(Self::typed(column, field_type))
            }
            None => {
                let column = s.trim();
                if column.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::column(column))
            }
        }
    }
}

impl fmt::Display for FieldSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field_type {
            Some(field_type) => write!(f, "{}={}", self.column, field_type),
            None => f.write_str(&self.column),
        }
    }
}

/// Which columns of a file are validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProcessingMode {
    /// Every non-empty cell is auto-detected.
    AllColumns,
    /// Only the listed columns, in header order.
    Fields(Vec<FieldSelection>),
    /// The single column whose header looks like a phone column.
    #[default]
    PhoneColumn,
}

/// Options controlling batch processing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Rendering for accepted phone numbers.
    pub phone_format: PhoneFormat,

    pub mode: ProcessingMode,

    /// Emit the header row as a row of `header` sentinel results.
    pub include_header: bool,

    /// Reject source files larger than this many bytes.
    pub max_file_bytes: Option<u64>,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phone_format(mut self, phone_format: PhoneFormat) -> Self {
        self.phone_format = phone_format;
        self
    }

    pub fn with_mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_include_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn with_max_file_bytes(mut self, max_file_bytes: Option<u64>) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }
}
