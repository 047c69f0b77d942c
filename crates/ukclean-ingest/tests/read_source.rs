//! File-based tests for source acquisition.

use std::fs;

use ukclean_ingest::{FileKind, IngestError, parse, read_source};

#[test]
fn reads_and_parses_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "name,phone\nJohn,07700 900123\n").unwrap();

    let source = read_source(&path, None).unwrap();
    assert_eq!(source.name, "contacts.csv");
    assert_eq!(source.kind, FileKind::Csv);

    let grid = parse(&source.content, source.kind).unwrap();
    assert_eq!(grid, vec![vec!["name", "phone"], vec!["John", "07700 900123"]]);
}

#[test]
fn reads_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pasted.txt");
    fs::write(&path, "name\tphone\nJohn\t07700 900123\n").unwrap();

    let source = read_source(&path, Some(1024)).unwrap();
    assert_eq!(source.kind, FileKind::Text);
}

#[test]
fn rejects_oversized_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.csv");
    fs::write(&path, "phone\n07700 900123\n").unwrap();

    let err = read_source(&path, Some(4)).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { limit: 4, .. }));
}

#[test]
fn rejects_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    fs::write(&path, "[]").unwrap();

    let err = read_source(&path, None).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFileType { .. }));
}

#[test]
fn rejects_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.csv");
    fs::write(&path, [b'p', b'h', 0xff, 0xfe, b'\n']).unwrap();

    let err = read_source(&path, None).unwrap_err();
    assert!(matches!(err, IngestError::InvalidEncoding { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_source(&dir.path().join("absent.csv"), None).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
