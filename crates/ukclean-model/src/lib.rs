//! Data model for UK field validation and cleaning.

pub mod error;
pub mod field;
pub mod options;
pub mod processing;
pub mod validation;

pub use error::{ModelError, Result};
pub use field::{FieldType, PhoneFormat};
pub use options::{FieldSelection, PHONE_COLUMN_KEYWORDS, ProcessingMode, ProcessingOptions};
pub use processing::{FileProcessingResult, ProcessedRow, ProcessingSummary};
pub use validation::{DetectedType, DetectedValidationResult, ValidationResult};
