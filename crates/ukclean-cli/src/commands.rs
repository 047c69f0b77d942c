use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info_span};

use ukclean_cli::export::{resolve_export_target, write_export};
use ukclean_cli::logging::redact_value;
use ukclean_core::process_file;
use ukclean_model::{
    DetectedValidationResult, FieldType, PhoneFormat, ProcessingMode, ProcessingOptions,
};
use ukclean_report::{CsvLayout, ExportFormat};
use ukclean_validate::{FieldValidator, auto_validate};

use crate::cli::{CheckArgs, CsvLayoutArg, ExportFormatArg, PhoneFormatArg, ProcessArgs};
use crate::summary::apply_table_style;
use crate::types::ProcessOutcome;

pub fn run_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Type", "Description", "Accepted names"]);
    apply_table_style(&mut table);
    for field_type in FieldType::ALL {
        table.add_row(vec![
            field_type.as_str().to_string(),
            field_type.label().to_string(),
            field_type.aliases().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessOutcome> {
    let options = processing_options(args);
    let span = info_span!("run_process", file = %args.file.display());
    let _guard = span.enter();

    let export = resolve_export_target(
        &args.file,
        args.export.map(export_format),
        args.layout.map(csv_layout),
        args.output.as_deref(),
        &options.mode,
    )?;
    let result = process_file(&args.file, &options)
        .with_context(|| format!("process {}", args.file.display()))?;
    if let Some(target) = &export {
        write_export(&result, target)?;
    }
    Ok(ProcessOutcome { result, export })
}

pub fn run_check(args: &CheckArgs) -> DetectedValidationResult {
    let phone_format = phone_format(args.phone_format);
    debug!(
        value = %redact_value(&args.value),
        field_type = ?args.field_type,
        "checking value"
    );
    match args.field_type {
        Some(field_type) => {
            FieldValidator::new(field_type, phone_format).validate_detected(&args.value)
        }
        None => auto_validate(&args.value, phone_format),
    }
}

fn processing_options(args: &ProcessArgs) -> ProcessingOptions {
    let mode = if args.all_columns {
        ProcessingMode::AllColumns
    } else if args.fields.is_empty() {
        ProcessingMode::PhoneColumn
    } else {
        ProcessingMode::Fields(args.fields.clone())
    };
    ProcessingOptions::new()
        .with_phone_format(phone_format(args.phone_format))
        .with_mode(mode)
        .with_include_header(args.include_header)
        .with_max_file_bytes(args.max_file_bytes)
}

fn phone_format(arg: PhoneFormatArg) -> PhoneFormat {
    match arg {
        PhoneFormatArg::International => PhoneFormat::International,
        PhoneFormatArg::Uk => PhoneFormat::Uk,
    }
}

fn export_format(arg: ExportFormatArg) -> ExportFormat {
    match arg {
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Json => ExportFormat::Json,
    }
}

fn csv_layout(arg: CsvLayoutArg) -> CsvLayout {
    match arg {
        CsvLayoutArg::SingleColumn => CsvLayout::SingleColumn,
        CsvLayoutArg::PerField => CsvLayout::PerField,
    }
}
