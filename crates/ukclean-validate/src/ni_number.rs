//! National Insurance number validation.

use std::sync::LazyLock;

use regex::Regex;
use ukclean_model::ValidationResult;

/// Two letters, six to eight digits, optional suffix letter.
static NI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{2})(\d{6,8})([A-Z]?)$").expect("Invalid NI number regex")
});

/// Prefix substituted when an NI number arrives as bare digits.
pub const PLACEHOLDER_PREFIX: &str = "AB";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NiNumberValidator;

impl NiNumberValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        let cleaned: String = raw
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        if cleaned.is_empty() {
            return ValidationResult::invalid("", "National Insurance number is empty");
        }
        if let Some(caps) = NI_PATTERN.captures(&cleaned) {
            let fixed = canonical(&caps[1], &caps[2], &caps[3]);
            return ValidationResult::valid(cleaned.as_str(), fixed);
        }
        let all_digits = cleaned.chars().all(|ch| ch.is_ascii_digit());
        match cleaned.len() {
            8 if all_digits => {
                let fixed = canonical(PLACEHOLDER_PREFIX, &cleaned, "");
                ValidationResult::repaired(cleaned.as_str(), fixed, "Added prefix letters")
            }
            // Missing prefix or missing suffix: no rule tells them apart.
            9 if all_digits => ValidationResult::invalid(
                cleaned,
                "9 digits could be missing prefix or suffix letters; cannot safely auto-correct",
            ),
            _ => ValidationResult::invalid(cleaned, "Invalid National Insurance number format"),
        }
    }
}

/// `AB 123456 C`: the letter pair, the first six digits, then any remainder.
fn canonical(prefix: &str, digits: &str, suffix: &str) -> String {
    let (head, tail) = digits.split_at(6);
    let mut out = format!("{prefix} {head}");
    if !tail.is_empty() || !suffix.is_empty() {
        out.push(' ');
        out.push_str(tail);
        out.push_str(suffix);
    }
    out
}
