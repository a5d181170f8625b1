//! Unit tests for source loading.

use std::fs;

use tempfile::TempDir;

use super::source::{read_source, SourceError};

#[test]
fn test_read_source_accepts_both_extensions() {
    let dir = TempDir::new().unwrap();

    for name in ["main.吉吉", "main.lls"] {
        let path = dir.path().join(name);
        fs::write(&path, "输出 （ “你好” ）\n").unwrap();

        assert_eq!(read_source(&path).unwrap(), "输出 （ “你好” ）\n");
    }
}

#[test]
fn test_read_source_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.txt");
    fs::write(&path, "x").unwrap();

    match read_source(&path) {
        Err(SourceError::UnsupportedExtension { extension }) => assert_eq!(extension, "txt"),
        other => panic!("Expected UnsupportedExtension, got {:?}", other),
    }
}

#[test]
fn test_read_source_without_extension() {
    let dir = TempDir::new().unwrap();

    match read_source(&dir.path().join("main")) {
        Err(SourceError::UnsupportedExtension { extension }) => assert_eq!(extension, ""),
        other => panic!("Expected UnsupportedExtension, got {:?}", other),
    }
}

#[test]
fn test_read_source_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.lls");

    assert!(matches!(read_source(&path), Err(SourceError::NotFound { .. })));
}

#[test]
fn test_read_source_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("folder.吉吉");
    fs::create_dir(&path).unwrap();

    assert!(matches!(read_source(&path), Err(SourceError::NotAFile { .. })));
}

#[test]
fn test_read_source_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.lls");
    fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

    let error = read_source(&path).unwrap_err();
    assert!(matches!(error, SourceError::Io { .. }));
    assert!(error.to_string().starts_with("failed to read"));
}
