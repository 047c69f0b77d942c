//! Per-field validation outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldType;

/// Outcome of validating a single value against one field grammar.
///
/// `fixed` is present exactly when `is_valid` is true. `error` is an
/// annotation: on a valid result it describes the repair that was applied,
/// on an invalid result it explains the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Cleaned core that the grammar was checked against.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// Accepted without repair.
    pub fn valid(value: impl Into<String>, fixed: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            value: value.into(),
            fixed: Some(fixed.into()),
            error: None,
        }
    }

    /// Accepted after a heuristic repair described by `note`.
    pub fn repaired(
        value: impl Into<String>,
        fixed: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            is_valid: true,
            value: value.into(),
            fixed: Some(fixed.into()),
            error: Some(note.into()),
        }
    }

    pub fn invalid(value: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            value: value.into(),
            fixed: None,
            error: Some(error.into()),
        }
    }

    /// Valid and carrying a repair note.
    pub fn is_repaired(&self) -> bool {
        self.is_valid && self.error.is_some()
    }

    /// Valid and the canonical form differs from the cleaned value.
    pub fn was_rewritten(&self) -> bool {
        self.is_valid
            && self
                .fixed
                .as_deref()
                .is_some_and(|fixed| fixed != self.value)
    }
}

/// Type label attached to a result by the dispatcher or processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedType {
    PhoneNumber,
    NiNumber,
    Postcode,
    SortCode,
    Unknown,
    /// Sentinel for header-row cells; excluded from all counts.
    Header,
}

impl DetectedType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PhoneNumber => "phone_number",
            Self::NiNumber => "ni_number",
            Self::Postcode => "postcode",
            Self::SortCode => "sort_code",
            Self::Unknown => "unknown",
            Self::Header => "header",
        }
    }

    pub fn field_type(self) -> Option<FieldType> {
        match self {
            Self::PhoneNumber => Some(FieldType::PhoneNumber),
            Self::NiNumber => Some(FieldType::NiNumber),
            Self::Postcode => Some(FieldType::Postcode),
            Self::SortCode => Some(FieldType::SortCode),
            Self::Unknown | Self::Header => None,
        }
    }
}

impl From<FieldType> for DetectedType {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::PhoneNumber => Self::PhoneNumber,
            FieldType::NiNumber => Self::NiNumber,
            FieldType::Postcode => Self::Postcode,
            FieldType::SortCode => Self::SortCode,
        }
    }
}

impl fmt::Display for DetectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`ValidationResult`] tagged with the type that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedValidationResult {
    pub detected_type: DetectedType,
    #[serde(flatten)]
    pub result: ValidationResult,
    /// Header name of the source column, when produced from a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Raw cell text before cleaning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl DetectedValidationResult {
    pub fn new(detected_type: DetectedType, result: ValidationResult) -> Self {
        Self {
            detected_type,
            result,
            column: None,
            original: None,
        }
    }

    pub fn unknown(value: impl Into<String>) -> Self {
        Self::new(
            DetectedType::Unknown,
            ValidationResult::invalid(value, "Could not determine data type"),
        )
    }

    pub fn header(cell: impl Into<String>) -> Self {
        let cell = cell.into();
        Self {
            detected_type: DetectedType::Header,
            result: ValidationResult {
                is_valid: false,
                value: cell.clone(),
                fixed: None,
                error: None,
            },
            column: None,
            original: Some(cell),
        }
    }

    /// Records where the value came from.
    #[must_use]
    pub fn with_source(mut self, column: impl Into<String>, original: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self.original = Some(original.into());
        self
    }

    pub fn is_header(&self) -> bool {
        self.detected_type == DetectedType::Header
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_valid
    }

    pub fn fixed(&self) -> Option<&str> {
        self.result.fixed.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.result.error.as_deref()
    }
}
