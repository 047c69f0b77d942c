//! Reading a source file from disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// How a source's lines are split into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Comma-separated with double-quote wrapped fields.
    Csv,
    /// Tab or multi-space separated.
    Text,
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Text => "text",
        }
    }

    /// Kind for a file extension, case-insensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "txt" | "tsv" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFileType {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }
}

/// Decoded text of a source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name without directories.
    pub name: String,
    pub kind: FileKind,
    pub content: String,
}

/// Reads and decodes a source file, rejecting it when larger than `max_bytes`.
pub fn read_source(path: &Path, max_bytes: Option<u64>) -> Result<SourceFile> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let kind = FileKind::from_path(path)?;
    if let Some(limit) = max_bytes {
        let size = fs::metadata(path)
            .map_err(|source| IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        if size > limit {
            return Err(IngestError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }
    let bytes = fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| IngestError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string();
    debug!(file_name = %name, kind = kind.as_str(), bytes = content.len(), "read source");
    Ok(SourceFile {
        name,
        kind,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(FileKind::from_extension("CSV"), Some(FileKind::Csv));
        assert_eq!(FileKind::from_extension("txt"), Some(FileKind::Text));
        assert_eq!(FileKind::from_extension("xlsx"), None);
    }

    #[test]
    fn test_kind_from_path_rejects_unknown() {
        let err = FileKind::from_path(Path::new("contacts.xlsx")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFileType { ref extension, .. } if extension == "xlsx"
        ));
    }
}
