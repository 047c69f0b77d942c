use std::io::Write;

use tracing::debug;
use ukclean_model::FileProcessingResult;

use crate::error::Result;

/// Writes the full report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(result: &FileProcessingResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(file_name = %result.file_name, "wrote JSON export");
    Ok(())
}

pub fn json_bytes(result: &FileProcessingResult) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_json(result, &mut buffer)?;
    Ok(buffer)
}
