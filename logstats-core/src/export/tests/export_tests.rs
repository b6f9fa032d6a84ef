use super::test_helpers::sample_stats;
use crate::export::{ExportError, ExportFormat, export};
use std::fs;
use tempfile::tempdir;

#[test]
fn export_writes_report_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.md");

    // Act
    export(ExportFormat::Markdown, &output, &sample_stats()).unwrap();

    // Assert
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("####"));
    assert!(content.contains('|'));
    assert!(content.contains("---"));
}

#[test]
fn export_never_overwrites() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.json");
    fs::write(&output, "keep me").unwrap();

    // Act
    let err = export(ExportFormat::Json, &output, &sample_stats()).unwrap_err();

    // Assert
    assert!(matches!(err, ExportError::Write { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
}
