use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize JSON export: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown export format '{0}' (expected csv or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
