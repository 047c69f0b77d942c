//! Field validators for UK phone numbers, National Insurance numbers,
//! postcodes and bank sort codes.
//!
//! Each validator owns one grammar and never fails: malformed input is an
//! ordinary [`ValidationResult`](ukclean_model::ValidationResult) with
//! `is_valid == false` and an explanatory `error`.
//!
//! # Example
//!
//! ```
//! use ukclean_model::{DetectedType, PhoneFormat};
//! use ukclean_validate::auto_validate;
//!
//! let result = auto_validate("+44 (0)7700 902678", PhoneFormat::International);
//! assert_eq!(result.detected_type, DetectedType::PhoneNumber);
//! assert_eq!(result.fixed(), Some("+447700902678"));
//! ```

mod dispatch;
mod ni_number;
mod phone;
mod postcode;
mod sort_code;
mod validator;

pub use dispatch::{DETECTION_ORDER, accepting_types, auto_validate, get_validator};
pub use ni_number::{NiNumberValidator, PLACEHOLDER_PREFIX};
pub use phone::PhoneNumberValidator;
pub use postcode::PostcodeValidator;
pub use sort_code::SortCodeValidator;
pub use validator::FieldValidator;
