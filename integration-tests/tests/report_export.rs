use integration_tests::harness::{analyze_args, fixture_path};
use logstats_core::cli::{ExitStatus, execute, run};
use logstats_core::export::ExportFormat;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;

fn access_log() -> String {
    fixture_path("access.log").to_string_lossy().into_owned()
}

#[test]
fn json_report_matches_fixture() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.json");

    // Act
    let status = run(&analyze_args(&access_log(), ExportFormat::Json, &output));

    // Assert
    assert_eq!(status, ExitStatus::Ok);
    let report: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        report,
        json!({
            "files": ["access.log"],
            "totalRequestsCount": 10,
            "responseSizeInBytes": { "average": 198.1, "max": 490, "p95": 490.0 },
            "resources": [
                { "resource": "/downloads/product_1", "totalRequestsCount": 8 },
                { "resource": "/downloads/product_2", "totalRequestsCount": 2 }
            ],
            "responseCodes": [
                { "code": 304, "totalResponsesCount": 5 },
                { "code": 404, "totalResponsesCount": 3 },
                { "code": 200, "totalResponsesCount": 2 }
            ],
            "requestsPerDate": [
                { "date": "2015-05-17", "weekday": "Sunday", "totalRequestsCount": 5, "totalRequestsPercentage": 50.0 },
                { "date": "2015-05-18", "weekday": "Monday", "totalRequestsCount": 3, "totalRequestsPercentage": 30.0 },
                { "date": "2015-05-19", "weekday": "Tuesday", "totalRequestsCount": 2, "totalRequestsPercentage": 20.0 }
            ],
            "uniqueProtocols": ["HTTP/1.1", "HTTP/1.0"]
        })
    );
}

#[test]
fn markdown_report_lists_status_reasons() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.md");

    // Act
    let status = run(&analyze_args(&access_log(), ExportFormat::Markdown, &output));

    // Assert
    assert_eq!(status, ExitStatus::Ok);
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("#### General Information"));
    assert!(report.contains("| Total Requests | 10 |"));
    assert!(report.contains("| 304 | Not Modified | 5 |"));
    assert!(report.contains("| 404 | Not Found | 3 |"));
    assert!(report.contains("| /downloads/product_1 | 8 |"));
}

#[test]
fn adoc_report_with_date_window() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.ad");
    let mut args = analyze_args(&access_log(), ExportFormat::Adoc, &output);
    args.from = Some(chrono::NaiveDate::from_ymd_opt(2015, 5, 18).unwrap());
    args.to = Some(chrono::NaiveDate::from_ymd_opt(2015, 5, 19).unwrap());

    // Act
    let stats = execute(&args).unwrap();

    // Assert
    assert_eq!(stats.total_requests_count, 5);
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("Total Requests: 5"));
    assert!(report.contains("- 404: 3 responses"));
    assert!(report.contains("- 304: 2 responses"));
    assert!(!report.contains("- 200:"));
}

#[test]
fn glob_reads_every_matching_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");
    fs::create_dir_all(logs.join("2015")).unwrap();
    fs::copy(fixture_path("access.log"), logs.join("a.log")).unwrap();
    fs::copy(fixture_path("access.log"), logs.join("2015").join("b.log")).unwrap();
    let output = dir.path().join("report.json");
    let pattern = format!("{}/*.log", logs.display());

    // Act
    let stats = execute(&analyze_args(&pattern, ExportFormat::Json, &output)).unwrap();

    // Assert
    assert_eq!(stats.total_requests_count, 20);
    let mut files = stats.files.clone();
    files.sort();
    assert_eq!(files, vec!["a.log".to_string(), "b.log".to_string()]);
}
