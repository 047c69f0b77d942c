//! Batch processing for the UK field cleaner.
//!
//! Takes a parsed grid (or a file / pasted text, via `ukclean-ingest`),
//! decides which columns to validate from the [`ProcessingMode`], runs the
//! field validators over every targeted cell and aggregates the outcome
//! into a [`FileProcessingResult`].
//!
//! # Example
//!
//! ```
//! use ukclean_core::process_text;
//! use ukclean_ingest::FileKind;
//! use ukclean_model::ProcessingOptions;
//!
//! let result = process_text(
//!     "name,mobile\nJohn,07700 900123",
//!     FileKind::Csv,
//!     "pasted",
//!     &ProcessingOptions::default(),
//! )?;
//! assert_eq!(result.summary.total_valid, 1);
//! # Ok::<(), ukclean_core::ProcessError>(())
//! ```
//!
//! [`ProcessingMode`]: ukclean_model::ProcessingMode
//! [`FileProcessingResult`]: ukclean_model::FileProcessingResult

mod columns;
mod error;
mod processor;

pub use columns::{ColumnTarget, detect_phone_column, normalize_header, plan_columns};
pub use error::{ProcessError, Result};
pub use processor::{process_file, process_rows, process_text, summarize};
