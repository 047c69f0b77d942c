//! The closed set of field validators.

use ukclean_model::{
    DetectedType, DetectedValidationResult, FieldType, PhoneFormat, ValidationResult,
};

use crate::ni_number::NiNumberValidator;
use crate::phone::PhoneNumberValidator;
use crate::postcode::PostcodeValidator;
use crate::sort_code::SortCodeValidator;

/// One validator per field grammar.
///
/// Only the phone validator carries configuration; the others are pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidator {
    Phone(PhoneNumberValidator),
    NiNumber(NiNumberValidator),
    Postcode(PostcodeValidator),
    SortCode(SortCodeValidator),
}

impl FieldValidator {
    pub fn new(field_type: FieldType, phone_format: PhoneFormat) -> Self {
        match field_type {
            FieldType::PhoneNumber => Self::Phone(PhoneNumberValidator::new(phone_format)),
            FieldType::NiNumber => Self::NiNumber(NiNumberValidator::new()),
            FieldType::Postcode => Self::Postcode(PostcodeValidator::new()),
            FieldType::SortCode => Self::SortCode(SortCodeValidator::new()),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Phone(_) => FieldType::PhoneNumber,
            Self::NiNumber(_) => FieldType::NiNumber,
            Self::Postcode(_) => FieldType::Postcode,
            Self::SortCode(_) => FieldType::SortCode,
        }
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        match self {
            Self::Phone(validator) => validator.validate(raw),
            Self::NiNumber(validator) => validator.validate(raw),
            Self::Postcode(validator) => validator.validate(raw),
            Self::SortCode(validator) => validator.validate(raw),
        }
    }

    /// Validates and tags the result with this validator's type.
    pub fn validate_detected(&self, raw: &str) -> DetectedValidationResult {
        DetectedValidationResult::new(DetectedType::from(self.field_type()), self.validate(raw))
    }
}
