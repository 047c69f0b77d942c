//! Where and how `process` writes its export.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;
use ukclean_model::{FileProcessingResult, ProcessingMode};
use ukclean_report::{CsvLayout, ExportFormat, export};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub format: ExportFormat,
    pub layout: CsvLayout,
    pub path: PathBuf,
}

/// Settles the export from the command-line choices.
///
/// No format and no output path means no export. An output path without a
/// format takes the format from its extension. Without an output path the
/// export lands next to `input` as `<stem>_cleaned.<ext>`.
pub fn resolve_export_target(
    input: &Path,
    format: Option<ExportFormat>,
    layout: Option<CsvLayout>,
    output: Option<&Path>,
    mode: &ProcessingMode,
) -> Result<Option<ExportTarget>> {
    let format = match (format, output) {
        (None, None) => return Ok(None),
        (Some(format), _) => format,
        (None, Some(path)) => {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default();
            match extension.parse::<ExportFormat>() {
                Ok(format) => format,
                Err(_) => bail!(
                    "cannot infer export format from {}; pass --export csv|json",
                    path.display()
                ),
            }
        }
    };
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let source_name = input
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("export");
            input.with_file_name(format.file_name(source_name))
        }
    };
    Ok(Some(ExportTarget {
        format,
        layout: layout.unwrap_or_else(|| CsvLayout::for_mode(mode)),
        path,
    }))
}

pub fn write_export(result: &FileProcessingResult, target: &ExportTarget) -> Result<()> {
    let file = File::create(&target.path)
        .with_context(|| format!("create {}", target.path.display()))?;
    export(result, target.format, target.layout, BufWriter::new(file))
        .with_context(|| format!("write {}", target.path.display()))?;
    info!(
        path = %target.path.display(),
        format = %target.format,
        "export written"
    );
    Ok(())
}
