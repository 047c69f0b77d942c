//! End-to-end processing through text and files.

use std::fs;

use ukclean_core::{ProcessError, process_file, process_text};
use ukclean_ingest::{FileKind, IngestError};
use ukclean_model::{
    DetectedType, FieldSelection, FieldType, PhoneFormat, ProcessingMode, ProcessingOptions,
};

fn fields(selections: &[&str]) -> ProcessingOptions {
    let selections = selections
        .iter()
        .map(|selection| selection.parse::<FieldSelection>().unwrap())
        .collect();
    ProcessingOptions::new().with_mode(ProcessingMode::Fields(selections))
}

#[test]
fn selected_fields_are_cleaned() {
    let options = fields(&["phone", "ni"]);
    let result = process_text(
        "name,phone,ni\nJohn,07123456789,AB123456C",
        FileKind::Csv,
        "people.csv",
        &options,
    )
    .unwrap();

    assert_eq!(result.file_name, "people.csv");
    assert_eq!(result.total_rows, 2);
    assert_eq!(result.processed_rows.len(), 1);
    let row = &result.processed_rows[0];
    assert_eq!(row.row_number, 1);
    assert_eq!(row.original_data, "John,07123456789,AB123456C");
    assert_eq!(row.validation_results.len(), 2);

    let phone = &row.validation_results[0];
    assert_eq!(phone.detected_type, DetectedType::PhoneNumber);
    assert_eq!(phone.fixed(), Some("+447123456789"));
    let ni = &row.validation_results[1];
    assert_eq!(ni.detected_type, DetectedType::NiNumber);
    assert_eq!(ni.fixed(), Some("AB 123456 C"));

    assert_eq!(result.summary.total_valid, 2);
    assert_eq!(result.summary.total_invalid, 0);
    assert_eq!(result.summary.total_fixed, 2);
}

#[test]
fn typed_selection_overrides_header_name() {
    let options = fields(&["account=sort_code"]).with_phone_format(PhoneFormat::Uk);
    let result = process_text(
        "Account\n12 34 56\n12345",
        FileKind::Csv,
        "bank.csv",
        &options,
    )
    .unwrap();
    let results: Vec<_> = result.results().map(|(_, result)| result).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].detected_type, DetectedType::from(FieldType::SortCode));
    assert_eq!(results[0].fixed(), Some("12-34-56"));
    assert_eq!(
        results[1].error(),
        Some("Sort code must be 6 digits (5 found)")
    );
}

#[test]
fn text_input_splits_on_tabs_and_wide_gaps() {
    let content = "name\tmobile\nJohn Smith\t07700 900123\nJane   +44 7700 900456";
    let options = ProcessingOptions::new().with_phone_format(PhoneFormat::Uk);
    let result = process_text(content, FileKind::Text, "pasted", &options).unwrap();
    let fixed: Vec<_> = result
        .results()
        .filter_map(|(_, result)| result.fixed())
        .collect();
    assert_eq!(fixed, vec!["07700900123", "07700900456"]);
}

#[test]
fn missing_phone_column_is_fatal() {
    let err = process_text(
        "name,email\nJohn,john@example.com",
        FileKind::Csv,
        "contacts.csv",
        &ProcessingOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ProcessError::NoPhoneColumn { .. }));
}

#[test]
fn unknown_selected_column_is_fatal() {
    let err = process_text(
        "name,phone\nJohn,07700 900123",
        FileKind::Csv,
        "contacts.csv",
        &fields(&["postcode"]),
    )
    .unwrap_err();
    assert!(matches!(err, ProcessError::UnknownColumn { ref column } if column == "postcode"));
}

#[test]
fn blank_input_is_an_ingest_error() {
    let err = process_text(" \n\n", FileKind::Csv, "blank.csv", &ProcessingOptions::default())
        .unwrap_err();
    assert!(matches!(err, ProcessError::Ingest(IngestError::EmptyInput)));
}

#[test]
fn processes_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.csv");
    fs::write(
        &path,
        "Customer,Telephone,Postcode\n\
         Ann,\"+44 (0)20 7946 0958\",sw1a1aa\n\
         Bob,07700 90012,M1 1AE\n",
    )
    .unwrap();

    let options = ProcessingOptions::new().with_mode(ProcessingMode::AllColumns);
    let result = process_file(&path, &options).unwrap();
    assert_eq!(result.file_name, "customers.csv");
    assert_eq!(result.processed_rows.len(), 2);

    let first: Vec<_> = result.processed_rows[0]
        .validation_results
        .iter()
        .map(|result| (result.detected_type, result.fixed()))
        .collect();
    assert_eq!(
        first,
        vec![
            (DetectedType::Unknown, None),
            (DetectedType::PhoneNumber, Some("+442079460958")),
            (DetectedType::Postcode, Some("SW1A 1AA")),
        ]
    );
    let bob_phone = &result.processed_rows[1].validation_results[1];
    assert!(!bob_phone.is_valid());
    assert_eq!(bob_phone.detected_type, DetectedType::Unknown);
    assert_eq!(bob_phone.column.as_deref(), Some("Telephone"));
    assert_eq!(bob_phone.original.as_deref(), Some("07700 90012"));
}

#[test]
fn oversized_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.csv");
    fs::write(&path, "phone\n07700 900123\n").unwrap();
    let options = ProcessingOptions::new().with_max_file_bytes(Some(8));
    let err = process_file(&path, &options).unwrap_err();
    assert!(matches!(
        err,
        ProcessError::Ingest(IngestError::FileTooLarge { .. })
    ));
}
