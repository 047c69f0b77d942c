//! Source ingestion for the field cleaner.
//!
//! This crate turns pasted text or an uploaded file into a rectangular-ish
//! grid of trimmed string cells. Rows may be ragged; the processor decides
//! what a short row means.
//!
//! # Example
//!
//! ```
//! use ukclean_ingest::{FileKind, parse};
//!
//! let grid = parse("name,phone\nJohn,\"07700 900123\"", FileKind::Csv)?;
//! assert_eq!(grid[1], vec!["John", "07700 900123"]);
//! # Ok::<(), ukclean_ingest::IngestError>(())
//! ```

mod error;
mod grid;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Parsing ===
pub use grid::{Grid, parse, parse_csv_line, split_text_line};

// === Source Files ===
pub use source::{FileKind, SourceFile, read_source};
