use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown phone format '{0}' (expected 'international' or 'uk')")]
    UnknownPhoneFormat(String),
    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),
    #[error("invalid field selection '{0}' (expected COLUMN or COLUMN=TYPE)")]
    InvalidFieldSelection(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
