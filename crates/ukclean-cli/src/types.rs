use ukclean_model::FileProcessingResult;

use ukclean_cli::export::ExportTarget;

#[derive(Debug)]
pub struct ProcessOutcome {
    pub result: FileProcessingResult,
    pub export: Option<ExportTarget>,
}
