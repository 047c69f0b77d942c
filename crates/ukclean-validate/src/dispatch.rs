//! Type lookup and type-agnostic detection.

use ukclean_model::{DetectedValidationResult, FieldType, PhoneFormat};

use crate::validator::FieldValidator;

/// Order in which [`auto_validate`] tries each grammar.
///
/// Some short digit strings satisfy more than one grammar once repairs are
/// considered (an eight-digit string is both a repairable NI number and a
/// zero-padded sort code), so the first acceptance wins.
pub const DETECTION_ORDER: [FieldType; 4] = [
    FieldType::PhoneNumber,
    FieldType::NiNumber,
    FieldType::Postcode,
    FieldType::SortCode,
];

/// Maps a declared type name to its validator; `None` when unrecognised.
pub fn get_validator(type_name: &str, phone_format: PhoneFormat) -> Option<FieldValidator> {
    FieldType::from_name(type_name).map(|field_type| FieldValidator::new(field_type, phone_format))
}

/// Validates against every grammar in [`DETECTION_ORDER`] and returns the
/// first acceptance, or an `unknown` result when nothing accepts.
pub fn auto_validate(raw: &str, phone_format: PhoneFormat) -> DetectedValidationResult {
    DETECTION_ORDER
        .iter()
        .map(|field_type| FieldValidator::new(*field_type, phone_format))
        .map(|validator| validator.validate_detected(raw))
        .find(DetectedValidationResult::is_valid)
        .unwrap_or_else(|| DetectedValidationResult::unknown(raw.trim()))
}

/// Every type whose validator accepts `raw`, in detection order.
pub fn accepting_types(raw: &str, phone_format: PhoneFormat) -> Vec<FieldType> {
    DETECTION_ORDER
        .iter()
        .copied()
        .filter(|field_type| {
            FieldValidator::new(*field_type, phone_format)
                .validate(raw)
                .is_valid
        })
        .collect()
}
