//! UK phone number validation.
//!
//! Raw input runs through a fixed sequence of cleaning stages before the
//! digit string is matched against the UK grammar:
//!
//! 1. leading labels, emoji markers and parenthetical suffixes
//! 2. trailing extensions
//! 3. wrapping quotes and guillemets
//! 4. a parenthesised trunk zero, as in `+44 (0)7700…`
//! 5. every remaining non-digit
//! 6. double-encoded country codes (`0044…`, `440…`)
//!
//! Unmatched digit strings get a small set of explicit repairs. Anything
//! still unmatched is rejected, with a specific diagnostic when the input is
//! recognisably a phone number that cannot be corrected safely.

use std::sync::LazyLock;

use regex::Regex;
use ukclean_model::{PhoneFormat, ValidationResult};

const FALLBACK_ERROR: &str = "Invalid UK phone number format";

/// Stage 1 patterns, applied in order.
static LABEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Leading phone/mobile emoji, optionally with a variation selector.
        r"^[\s\x{1F4DE}\x{1F4F1}\x{260E}\x{FE0F}]+",
        r"(?i)^\s*(?:telephone|landline|mobile|office|phone|cell|home|work|mob|tel)\.?\s*(?:\([a-z .]*\))?\s*[:\-]\s*",
        r"(?i)\s*\((?:uk|mobile|mob|home|work|landline)\)\s*$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid phone label regex"))
    .collect()
});

static EXTENSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:;\s*ext=|ext(?:ension)?\.?|x|#)\s*\d{1,6}\s*$")
        .expect("Invalid phone extension regex")
});

static ZERO_IN_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*0\s*\)").expect("Invalid trunk zero regex"));

static MALFORMED_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+44\s*\(\s*0").expect("Invalid malformed zero regex"));

static URI_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:tel|callto|sms)\s*:").expect("Invalid URI scheme regex")
});

static EMBEDDED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.|\.(?:com|co\.uk|me)/)").expect("Invalid URL regex")
});

static LOOKALIKE_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][OoIl]|[OoIl][0-9]").expect("Invalid look-alike regex"));

static MULTIPLE_NUMBERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]\s*(?:/|,|;|&|\bor\b|\band\b)\s*\+?[0-9]")
        .expect("Invalid multiple number regex")
});

/// Shapes of an accepted digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberShape {
    /// `7` plus nine digits, no prefix at all.
    Mobile,
    /// `1` plus ten digits.
    ShortUk,
    /// `44` plus the ten-digit national number.
    International,
    /// Trunk `0` plus ten digits.
    Landline,
    /// Trunk `0`, four-digit area code, six-digit subscriber number.
    LandlineAreaCode,
}

impl NumberShape {
    /// The ten-digit national significant number.
    fn national_number(self, digits: &str) -> &str {
        match self {
            Self::Mobile => digits,
            Self::ShortUk | Self::Landline | Self::LandlineAreaCode => &digits[1..],
            Self::International => &digits[2..],
        }
    }
}

/// Grammar in match order; the first matching shape wins.
static GRAMMAR: LazyLock<Vec<(NumberShape, Regex)>> = LazyLock::new(|| {
    [
        (NumberShape::Mobile, r"^7\d{9}$"),
        (NumberShape::ShortUk, r"^1\d{10}$"),
        (NumberShape::International, r"^44\d{10}$"),
        (NumberShape::Landline, r"^0\d{10}$"),
        (NumberShape::LandlineAreaCode, r"^0\d{4}\d{6}$"),
    ]
    .into_iter()
    .map(|(shape, pattern)| {
        (
            shape,
            Regex::new(pattern).expect("Invalid phone grammar regex"),
        )
    })
    .collect()
});

/// A repair proposes candidate digit strings; the first candidate that
/// satisfies the grammar is accepted.
struct Repair {
    note: &'static str,
    candidates: fn(&str) -> Vec<String>,
}

const REPAIRS: &[Repair] = &[
    Repair {
        note: "Added country code",
        candidates: add_country_code,
    },
    Repair {
        note: "Removed trunk prefix before country code",
        candidates: drop_trunk_before_country_code,
    },
    Repair {
        note: "Added missing prefix",
        candidates: prefix_short_mobile,
    },
];

/// Ten-digit national number typed without trunk or country prefix.
fn add_country_code(digits: &str) -> Vec<String> {
    if digits.len() == 10 && !digits.starts_with('0') {
        vec![format!("44{digits}")]
    } else {
        Vec::new()
    }
}

/// `044…`: a trunk zero typed in front of the country code.
///
/// An eleven-digit `0…` number already matches the landline shape, so the
/// repair targets the thirteen-digit `044` form instead.
fn drop_trunk_before_country_code(digits: &str) -> Vec<String> {
    if digits.len() == 13 && digits.starts_with("044") {
        vec![digits[1..].to_string()]
    } else {
        Vec::new()
    }
}

/// Nine digits starting with `7`.
fn prefix_short_mobile(digits: &str) -> Vec<String> {
    if digits.len() == 9 && digits.starts_with('7') {
        vec![format!("44{digits}"), format!("0{digits}")]
    } else {
        Vec::new()
    }
}

/// Validates and canonicalises UK phone numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneNumberValidator {
    format: PhoneFormat,
}

impl PhoneNumberValidator {
    pub fn new(format: PhoneFormat) -> Self {
        Self { format }
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        if raw.trim().is_empty() {
            return ValidationResult::invalid("", "Phone number is empty");
        }
        let stripped = strip_wrappers(&strip_extension(&strip_labels(raw)));
        let digits = normalize_prefix(&only_digits(&collapse_trunk_zero(&stripped)));

        if let Some(shape) = match_shape(&digits) {
            return ValidationResult::valid(digits.as_str(), self.render(shape, &digits));
        }
        if let Some((shape, candidate, note)) = repair(&digits) {
            return ValidationResult::repaired(
                digits.as_str(),
                self.render(shape, &candidate),
                note,
            );
        }
        let error =
            diagnose(raw, &stripped, &digits).unwrap_or_else(|| FALLBACK_ERROR.to_string());
        ValidationResult::invalid(digits, error)
    }

    fn render(&self, shape: NumberShape, digits: &str) -> String {
        let national = shape.national_number(digits);
        match self.format {
            PhoneFormat::International => format!("+44{national}"),
            PhoneFormat::Uk => format!("0{national}"),
        }
    }
}

fn strip_labels(raw: &str) -> String {
    LABEL_PATTERNS
        .iter()
        .fold(raw.to_string(), |text, pattern| {
            pattern.replace(&text, "").into_owned()
        })
}

fn strip_extension(text: &str) -> String {
    EXTENSION_PATTERN.replace(text, "").into_owned()
}

fn strip_wrappers(text: &str) -> String {
    text.trim()
        .trim_matches(|ch: char| {
            matches!(
                ch,
                '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}' | '«' | '»' | '‹' | '›'
            )
        })
        .trim()
        .to_string()
}

fn collapse_trunk_zero(text: &str) -> String {
    ZERO_IN_PARENS.replace_all(text, "").into_owned()
}

fn only_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Undoes double-encoded country codes.
fn normalize_prefix(digits: &str) -> String {
    let digits = match digits.strip_prefix("0044") {
        Some(rest) => format!("44{rest}"),
        None => digits.to_string(),
    };
    if digits.len() == 13 && digits.starts_with("440") {
        format!("44{}", &digits[3..])
    } else {
        digits
    }
}

/// First grammar shape matching `digits`. Shapes whose national number
/// starts with `0` are refused: no UK national number does, and rendering
/// one would produce a `00…` prefix.
fn match_shape(digits: &str) -> Option<NumberShape> {
    grammar_shape(digits).filter(|shape| !has_zero_national(*shape, digits))
}

fn grammar_shape(digits: &str) -> Option<NumberShape> {
    GRAMMAR
        .iter()
        .find(|(_, pattern)| pattern.is_match(digits))
        .map(|(shape, _)| *shape)
}

fn has_zero_national(shape: NumberShape, digits: &str) -> bool {
    shape.national_number(digits).starts_with('0')
}

fn repair(digits: &str) -> Option<(NumberShape, String, &'static str)> {
    REPAIRS.iter().find_map(|repair| {
        (repair.candidates)(digits)
            .into_iter()
            .find_map(|candidate| {
                match_shape(&candidate).map(|shape| (shape, candidate, repair.note))
            })
    })
}

/// Explains inputs that look like phone numbers but are not safe to correct.
fn diagnose(raw: &str, stripped: &str, digits: &str) -> Option<String> {
    if URI_SCHEME.is_match(raw) {
        return Some(
            "Phone URI schemes (tel:, callto:, sms:) cannot be safely auto-corrected".to_string(),
        );
    }
    if EMBEDDED_URL.is_match(raw) {
        return Some("Number is embedded in a URL; cannot safely extract it".to_string());
    }
    if LOOKALIKE_LETTERS.is_match(stripped) {
        return Some(
            "Contains letters that look like digits (O, I or l); cannot safely auto-correct"
                .to_string(),
        );
    }
    if stripped
        .chars()
        .any(|ch| ch.is_numeric() && !ch.is_ascii_digit())
    {
        return Some("Contains non-ASCII digits; cannot safely auto-correct".to_string());
    }
    if MALFORMED_ZERO.is_match(stripped) && !ZERO_IN_PARENS.is_match(stripped) {
        return Some("Malformed '+44 (0' prefix; cannot safely auto-correct".to_string());
    }
    if digits.len() >= 18 && MULTIPLE_NUMBERS.is_match(stripped) {
        return Some("Contains more than one phone number".to_string());
    }
    if grammar_shape(digits).is_some_and(|shape| has_zero_national(shape, digits)) {
        return Some(
            "UK national numbers cannot start with 0 after the country or trunk prefix"
                .to_string(),
        );
    }
    match digits.len() {
        0 => Some("No digits found".to_string()),
        count if count < 10 => Some(format!(
            "Too few digits for a UK phone number ({count} found)"
        )),
        count if count > 12 => Some(format!(
            "Too many digits for a UK phone number ({count} found)"
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn international(raw: &str) -> ValidationResult {
        PhoneNumberValidator::new(PhoneFormat::International).validate(raw)
    }

    fn uk(raw: &str) -> ValidationResult {
        PhoneNumberValidator::new(PhoneFormat::Uk).validate(raw)
    }

    #[test]
    fn accepts_plain_mobile() {
        let result = international("07123456789");
        assert!(result.is_valid);
        assert_eq!(result.value, "07123456789");
        assert_eq!(result.fixed.as_deref(), Some("+447123456789"));
        assert_eq!(result.error, None);

        let result = uk("07123456789");
        assert_eq!(result.fixed.as_deref(), Some("07123456789"));
    }

    #[test]
    fn collapses_parenthesised_zero() {
        let result = international("+44 (0)7700 902678");
        assert!(result.is_valid);
        assert_eq!(result.fixed.as_deref(), Some("+447700902678"));
        assert_eq!(uk("+44 (0)7700 902678").fixed.as_deref(), Some("07700902678"));
    }

    #[test]
    fn strips_labels_and_icons() {
        for raw in [
            "Mobile: 07700 900123",
            "Tel (mob): 07700 900123",
            "\u{1F4F1} 07700 900123",
            "\u{260E}\u{FE0F} 07700-900-123",
            "07700 900123 (UK)",
            "07700 900123 (mobile)",
        ] {
            let result = international(raw);
            assert!(result.is_valid, "{raw}: {:?}", result.error);
            assert_eq!(result.fixed.as_deref(), Some("+447700900123"), "{raw}");
        }
    }

    #[test]
    fn strips_extensions_and_wrappers() {
        for raw in [
            "020 7946 0018 x12",
            "020 7946 0018 ext 12",
            "020 7946 0018 ext. 12",
            "020 7946 0018;ext=12",
            "\"020 7946 0018\"",
            "«020 7946 0018»",
        ] {
            let result = international(raw);
            assert!(result.is_valid, "{raw}: {:?}", result.error);
            assert_eq!(result.fixed.as_deref(), Some("+442079460018"), "{raw}");
        }
    }

    #[test]
    fn undoes_double_encoded_country_codes() {
        assert_eq!(
            international("0044 7700 900123").fixed.as_deref(),
            Some("+447700900123")
        );
        assert_eq!(
            international("+44 07700 900123").fixed.as_deref(),
            Some("+447700900123")
        );
        assert_eq!(
            international("0044 (0) 7700 900123").fixed.as_deref(),
            Some("+447700900123")
        );
    }

    #[test]
    fn bare_mobile_is_treated_as_local() {
        let result = uk("7700 900123");
        assert!(result.is_valid);
        assert_eq!(result.fixed.as_deref(), Some("07700900123"));
        assert_eq!(result.error, None);
    }

    #[test]
    fn adds_missing_country_code() {
        let result = international("121 496 0000");
        assert!(result.is_valid);
        assert_eq!(result.value, "1214960000");
        assert_eq!(result.fixed.as_deref(), Some("+441214960000"));
        assert_eq!(result.error.as_deref(), Some("Added country code"));
    }

    #[test]
    fn removes_trunk_zero_before_country_code() {
        let result = uk("044 7700 900123");
        assert!(result.is_valid);
        assert_eq!(result.fixed.as_deref(), Some("07700900123"));
        assert_eq!(
            result.error.as_deref(),
            Some("Removed trunk prefix before country code")
        );
    }

    #[test]
    fn rejects_zero_after_prefix() {
        let expected = Some(
            "UK national numbers cannot start with 0 after the country or trunk prefix",
        );
        let result = uk("+44 0447 700 900");
        assert!(!result.is_valid);
        assert_eq!(result.value, "440447700900");
        assert_eq!(result.error.as_deref(), expected);

        let result = international("1 0123 456789");
        assert!(!result.is_valid);
        assert!(result.fixed.is_none());
        assert_eq!(result.error.as_deref(), expected);
    }

    #[test]
    fn nine_digit_mobile_is_not_guessed() {
        let result = international("7700 90012");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Too few digits for a UK phone number (9 found)")
        );
    }

    #[test]
    fn reports_lookalike_letters() {
        let result = international("O77OO 9OO123");
        assert!(!result.is_valid);
        assert!(result.fixed.is_none());
        assert!(result.error.unwrap().contains("look like digits"));
    }

    #[test]
    fn reports_non_ascii_digits() {
        let result = international("\u{0660}\u{0667}\u{0667}\u{0660}\u{0660}");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Contains non-ASCII digits; cannot safely auto-correct")
        );
    }

    #[test]
    fn reports_urls() {
        let result = international("https://wa.me/447700900123?text=hi1");
        assert!(!result.is_valid);
        assert!(result.error.unwrap().contains("URL"));

        let result = international("callto:+44 7700 9001234");
        assert!(!result.is_valid);
        assert!(result.error.unwrap().contains("URI"));
    }

    #[test]
    fn reports_malformed_zero_prefix() {
        let result = international("+44 (0 7700 9001");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Malformed '+44 (0' prefix; cannot safely auto-correct")
        );
    }

    #[test]
    fn reports_multiple_numbers() {
        let result = international("07700 900123 / 07700 900456");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Contains more than one phone number")
        );
    }

    #[test]
    fn falls_back_to_generic_error() {
        let result = international("0207 946 001");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some(FALLBACK_ERROR));
    }

    #[test]
    fn rejects_empty_input() {
        let result = international("   ");
        assert!(!result.is_valid);
        assert_eq!(result.value, "");
        assert_eq!(result.error.as_deref(), Some("Phone number is empty"));
    }

    #[test]
    fn international_form_is_stable() {
        let first = international("07700 900123");
        let second = international(first.fixed.as_deref().unwrap());
        assert_eq!(second.fixed, first.fixed);
        assert_eq!(second.error, None);
    }
}
