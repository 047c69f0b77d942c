//! Bank sort code validation.

use ukclean_model::ValidationResult;

const SORT_CODE_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortCodeValidator;

impl SortCodeValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() == SORT_CODE_DIGITS {
            let fixed = canonical(&digits);
            return ValidationResult::valid(digits, fixed);
        }
        // Zero-padded or over-separated input such as `12-00-34-56`.
        if digits.len() == SORT_CODE_DIGITS + 2 && digits.contains("00") {
            let trimmed = digits.replacen("00", "", 1);
            if trimmed.len() == SORT_CODE_DIGITS {
                let fixed = canonical(&trimmed);
                return ValidationResult::repaired(digits, fixed, "Removed extra zeros");
            }
        }
        let error = format!(
            "Sort code must be {SORT_CODE_DIGITS} digits ({} found)",
            digits.len()
        );
        ValidationResult::invalid(digits, error)
    }
}

/// `NN-NN-NN`.
fn canonical(digits: &str) -> String {
    format!("{}-{}-{}", &digits[0..2], &digits[2..4], &digits[4..6])
}
