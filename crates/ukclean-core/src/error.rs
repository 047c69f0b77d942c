use thiserror::Error;
use ukclean_ingest::IngestError;

/// Failures that abort a whole file. Malformed fields never end up here.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("no rows to process")]
    EmptyGrid,

    #[error("no phone column found (looked for headers containing: {keywords})")]
    NoPhoneColumn { keywords: String },

    #[error("column '{column}' not found in header")]
    UnknownColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ProcessError>;
