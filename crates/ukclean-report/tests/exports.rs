//! Exports of processed files.

use ukclean_core::process_text;
use ukclean_ingest::FileKind;
use ukclean_model::{FieldSelection, FileProcessingResult, ProcessingMode, ProcessingOptions};
use ukclean_report::{CsvLayout, ExportFormat, csv_bytes, export_bytes, json_bytes, write_csv};

fn process(content: &str, options: &ProcessingOptions) -> FileProcessingResult {
    process_text(content, FileKind::Csv, "pasted", options).unwrap()
}

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn single_column_csv() {
    let options = ProcessingOptions::new().with_include_header(true);
    let result = process(
        "name,mobile\nAnn,07700 900123\nBob,12345\nCat,\"+44 (0)20 7946 0958\"",
        &options,
    );
    let csv = text(csv_bytes(&result, CsvLayout::for_mode(&options.mode)).unwrap());
    insta::assert_snapshot!(csv.trim_end(), @r#"
Row,Phone Number,Is Valid,Detected Type,Fixed Value,Error
1,"07700 900123","true","phone_number","+447700900123",""
2,"12345","false","phone_number","","Too few digits for a UK phone number (5 found)"
3,"+44 (0)20 7946 0958","true","phone_number","+442079460958",""
"#);
}

#[test]
fn per_field_csv() {
    let options = ProcessingOptions::new().with_mode(ProcessingMode::Fields(vec![
        FieldSelection::column("phone"),
        FieldSelection::column("ni"),
    ]));
    let result = process("name,phone,ni\nJohn,07123456789,AB123456C", &options);
    let csv = text(csv_bytes(&result, CsvLayout::for_mode(&options.mode)).unwrap());
    insta::assert_snapshot!(csv.trim_end(), @r#"
Row,Column,Original Value,Is Valid,Detected Type,Fixed Value,Error
1,"phone","07123456789","true","phone_number","+447123456789",""
1,"ni","AB123456C","true","ni_number","AB 123456 C",""
"#);
}

#[test]
fn json_export_is_the_full_report() {
    let result = process("name,mobile\nAnn,07700 900123", &ProcessingOptions::default());
    let json = text(json_bytes(&result).unwrap());
    insta::assert_snapshot!(json.trim_end(), @r#"
{
  "fileName": "pasted",
  "totalRows": 2,
  "processedRows": [
    {
      "rowNumber": 1,
      "originalData": "Ann,07700 900123",
      "validationResults": [
        {
          "detectedType": "phone_number",
          "isValid": true,
          "value": "07700900123",
          "fixed": "+447700900123",
          "column": "mobile",
          "original": "07700 900123"
        }
      ]
    }
  ],
  "summary": {
    "totalValid": 1,
    "totalInvalid": 0,
    "totalFixed": 1,
    "errors": []
  }
}
"#);

    let parsed: FileProcessingResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn export_dispatches_on_format() {
    let result = process("phone\n07700 900123", &ProcessingOptions::default());
    let csv = export_bytes(&result, ExportFormat::Csv, CsvLayout::SingleColumn).unwrap();
    assert_eq!(csv, csv_bytes(&result, CsvLayout::SingleColumn).unwrap());
    let json = export_bytes(&result, ExportFormat::Json, CsvLayout::SingleColumn).unwrap();
    assert_eq!(json, json_bytes(&result).unwrap());
}

#[test]
fn csv_export_writes_to_any_writer() {
    let result = process("phone\n07700 900123\n", &ProcessingOptions::default());
    let mut out = Vec::new();
    write_csv(&result, CsvLayout::PerField, &mut out).unwrap();
    assert_eq!(text(out).lines().count(), 2);
}
