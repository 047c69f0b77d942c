//! Field types and phone output formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The closed set of field grammars the cleaner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    PhoneNumber,
    NiNumber,
    Postcode,
    SortCode,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::PhoneNumber,
        FieldType::NiNumber,
        FieldType::Postcode,
        FieldType::SortCode,
    ];

    /// Stable snake_case name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PhoneNumber => "phone_number",
            Self::NiNumber => "ni_number",
            Self::Postcode => "postcode",
            Self::SortCode => "sort_code",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::PhoneNumber => "UK phone number",
            Self::NiNumber => "National Insurance number",
            Self::Postcode => "UK postcode",
            Self::SortCode => "Bank sort code",
        }
    }

    /// Names accepted by [`FieldType::from_name`], canonical name first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::PhoneNumber => &["phone_number", "phone", "mobile", "telephone", "tel"],
            Self::NiNumber => &["ni_number", "ni", "national_insurance", "nino"],
            Self::Postcode => &["postcode", "post_code"],
            Self::SortCode => &["sort_code", "sortcode", "bank"],
        }
    }

    /// Resolves a declared type name, case-insensitively and with synonyms.
    ///
    /// Surrounding whitespace is ignored and inner spaces or hyphens are read
    /// as underscores, so `"Post Code"` and `"post-code"` both resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = normalize_type_name(name);
        if key.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|field_type| field_type.aliases().contains(&key.as_str()))
    }
}

fn normalize_type_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch == ' ' || ch == '-' { '_' } else { ch })
        .collect()
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::UnknownFieldType(s.to_string()))
    }
}

/// Output rendering for accepted phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    /// `+44` followed by the national significant number.
    #[default]
    International,
    /// Trunk `0` followed by the national significant number.
    Uk,
}

impl PhoneFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::International => "international",
            Self::Uk => "uk",
        }
    }
}

impl fmt::Display for PhoneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "international" | "intl" => Ok(Self::International),
            "uk" | "national" => Ok(Self::Uk),
            _ => Err(ModelError::UnknownPhoneFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_synonyms_case_insensitively() {
        assert_eq!(FieldType::from_name("Phone"), Some(FieldType::PhoneNumber));
        assert_eq!(FieldType::from_name("MOBILE"), Some(FieldType::PhoneNumber));
        assert_eq!(FieldType::from_name("ni"), Some(FieldType::NiNumber));
        assert_eq!(
            FieldType::from_name("National Insurance"),
            Some(FieldType::NiNumber)
        );
        assert_eq!(FieldType::from_name("post_code"), Some(FieldType::Postcode));
        assert_eq!(FieldType::from_name("SortCode"), Some(FieldType::SortCode));
        assert_eq!(FieldType::from_name("bank"), Some(FieldType::SortCode));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(FieldType::from_name("email"), None);
        assert_eq!(FieldType::from_name("   "), None);
        assert!("surname".parse::<FieldType>().is_err());
    }

    #[test]
    fn phone_format_parses() {
        assert_eq!("UK".parse::<PhoneFormat>(), Ok(PhoneFormat::Uk));
        assert_eq!(
            "international".parse::<PhoneFormat>(),
            Ok(PhoneFormat::International)
        );
        assert_eq!(
            "e164".parse::<PhoneFormat>(),
            Err(ModelError::UnknownPhoneFormat("e164".to_string()))
        );
    }
}
