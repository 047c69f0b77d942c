//! Choosing which columns of a file are validated, and how.

use ukclean_model::{
    DetectedValidationResult, FieldSelection, FieldType, PHONE_COLUMN_KEYWORDS, PhoneFormat,
    ProcessingMode,
};
use ukclean_validate::{FieldValidator, auto_validate};

use crate::error::{ProcessError, Result};

/// A header column selected for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTarget {
    pub index: usize,
    pub header: String,
    /// Fixed validator, or `None` to auto-detect each cell.
    pub validator: Option<FieldValidator>,
}

impl ColumnTarget {
    pub fn validate(&self, raw: &str, phone_format: PhoneFormat) -> DetectedValidationResult {
        match &self.validator {
            Some(validator) => validator.validate_detected(raw),
            None => auto_validate(raw, phone_format),
        }
    }
}

/// Lower-cases a header and drops everything but letters and digits.
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Index of the first header containing any phone keyword.
pub fn detect_phone_column(headers: &[String]) -> Option<usize> {
    headers.iter().position(|header| {
        let normalized = normalize_header(header);
        PHONE_COLUMN_KEYWORDS
            .iter()
            .any(|keyword| normalized.contains(keyword))
    })
}

/// Resolves the processing mode into targets in header order.
pub fn plan_columns(
    headers: &[String],
    mode: &ProcessingMode,
    phone_format: PhoneFormat,
) -> Result<Vec<ColumnTarget>> {
    match mode {
        ProcessingMode::AllColumns => Ok(headers
            .iter()
            .enumerate()
            .map(|(index, header)| ColumnTarget {
                index,
                header: header.clone(),
                validator: None,
            })
            .collect()),
        ProcessingMode::PhoneColumn => {
            let index =
                detect_phone_column(headers).ok_or_else(|| ProcessError::NoPhoneColumn {
                    keywords: PHONE_COLUMN_KEYWORDS.join(", "),
                })?;
            Ok(vec![ColumnTarget {
                index,
                header: headers[index].clone(),
                validator: Some(FieldValidator::new(FieldType::PhoneNumber, phone_format)),
            }])
        }
        ProcessingMode::Fields(selections) => {
            let mut targets = selections
                .iter()
                .map(|selection| select_column(headers, selection, phone_format))
                .collect::<Result<Vec<_>>>()?;
            targets.sort_by_key(|target| target.index);
            targets.dedup_by_key(|target| target.index);
            Ok(targets)
        }
    }
}

fn select_column(
    headers: &[String],
    selection: &FieldSelection,
    phone_format: PhoneFormat,
) -> Result<ColumnTarget> {
    let wanted = selection.column.trim();
    let index = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ProcessError::UnknownColumn {
            column: selection.column.clone(),
        })?;
    let field_type = selection
        .field_type
        .or_else(|| FieldType::from_name(&headers[index]));
    Ok(ColumnTarget {
        index,
        header: headers[index].clone(),
        validator: field_type.map(|field_type| FieldValidator::new(field_type, phone_format)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_header("Phone No."), "phoneno");
        assert_eq!(normalize_header(" Tel (Mobile) "), "telmobile");
    }

    #[test]
    fn detects_first_phone_like_header() {
        assert_eq!(
            detect_phone_column(&headers(&["Name", "Mobile Phone", "Telephone"])),
            Some(1)
        );
        assert_eq!(detect_phone_column(&headers(&["name", "TEL"])), Some(1));
        assert_eq!(
            detect_phone_column(&headers(&["Contact Number", "Phone"])),
            Some(0)
        );
        assert_eq!(detect_phone_column(&headers(&["name", "email"])), None);
    }

    #[test]
    fn phone_mode_fails_without_phone_column() {
        let err = plan_columns(
            &headers(&["name", "email"]),
            &ProcessingMode::PhoneColumn,
            PhoneFormat::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ProcessError::NoPhoneColumn { .. }));
    }

    #[test]
    fn field_mode_resolves_types_and_orders_by_header() {
        let mode = ProcessingMode::Fields(vec![
            FieldSelection::column("NI"),
            FieldSelection::column("phone"),
            FieldSelection::typed("account", FieldType::SortCode),
            FieldSelection::column("notes"),
        ]);
        let targets = plan_columns(
            &headers(&["name", "phone", "ni", "account", "notes"]),
            &mode,
            PhoneFormat::Uk,
        )
        .expect("plan columns");
        let summary: Vec<(usize, Option<FieldType>)> = targets
            .iter()
            .map(|target| {
                (
                    target.index,
                    target.validator.map(|validator| validator.field_type()),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, Some(FieldType::PhoneNumber)),
                (2, Some(FieldType::NiNumber)),
                (3, Some(FieldType::SortCode)),
                (4, None),
            ]
        );
    }

    #[test]
    fn field_mode_rejects_missing_column() {
        let mode = ProcessingMode::Fields(vec![FieldSelection::column("postcode")]);
        let err = plan_columns(&headers(&["name"]), &mode, PhoneFormat::default()).unwrap_err();
        assert!(matches!(err, ProcessError::UnknownColumn { ref column } if column == "postcode"));
    }

    #[test]
    fn all_columns_mode_auto_detects() {
        let targets = plan_columns(
            &headers(&["a", "b"]),
            &ProcessingMode::AllColumns,
            PhoneFormat::default(),
        )
        .expect("plan columns");
        assert_eq!(targets.len(), 2);
        assert!(targets.iter().all(|target| target.validator.is_none()));
    }
}
