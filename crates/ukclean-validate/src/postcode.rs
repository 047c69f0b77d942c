//! UK postcode validation.

use std::sync::LazyLock;

use regex::Regex;
use ukclean_model::ValidationResult;

struct Grammar {
    spaced: Regex,
    compact: Regex,
}

/// Standard outward/inward grammar plus the non-geographic `GIR 0AA`.
static GRAMMARS: LazyLock<[Grammar; 2]> = LazyLock::new(|| {
    [
        Grammar {
            spaced: Regex::new(r"^[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}$")
                .expect("Invalid postcode regex"),
            compact: Regex::new(r"^[A-Z]{1,2}\d[A-Z\d]?\d[A-Z]{2}$")
                .expect("Invalid postcode regex"),
        },
        Grammar {
            spaced: Regex::new(r"^GIR ?0AA$").expect("Invalid postcode regex"),
            compact: Regex::new(r"^GIR0AA$").expect("Invalid postcode regex"),
        },
    ]
});

/// The inward code is always a digit followed by two letters.
const INWARD_LEN: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostcodeValidator;

impl PostcodeValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        let collapsed = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();
        let compact = collapsed.replace(' ', "");
        if compact.is_empty() {
            return ValidationResult::invalid("", "Postcode is empty");
        }
        if GRAMMARS.iter().any(|grammar| grammar.spaced.is_match(&collapsed)) {
            let fixed = with_inward_space(&compact);
            return ValidationResult::valid(compact, fixed);
        }
        if GRAMMARS.iter().any(|grammar| grammar.compact.is_match(&compact)) {
            let fixed = with_inward_space(&compact);
            if fixed == collapsed {
                return ValidationResult::valid(compact, fixed);
            }
            return ValidationResult::repaired(compact, fixed, "Added proper spacing");
        }
        ValidationResult::invalid(compact, "Invalid UK postcode format")
    }
}

fn with_inward_space(compact: &str) -> String {
    let (outward, inward) = compact.split_at(compact.len() - INWARD_LEN);
    format!("{outward} {inward}")
}
