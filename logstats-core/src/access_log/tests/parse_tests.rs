use crate::access_log::{Diagnostic, LineParser, MemorySink, ParseError};
use chrono::NaiveDate;
use std::sync::Arc;

const APT_LINE: &str = r#"93.180.71.3 - - [17/May/2015:08:05:32 +0000] "GET /downloads/product_1 HTTP/1.1" 200 100 "-" "Debian APT-HTTP/1.3 (0.8.16~exp12ubuntu10.21)""#;

fn parser_with_sink() -> (LineParser, MemorySink) {
    let sink = MemorySink::new();
    (LineParser::with_sink(Arc::new(sink.clone())), sink)
}

#[test]
fn parses_combined_log_line() {
    // Arrange
    let parser = LineParser::new();

    // Act
    let record = parser.parse(APT_LINE).unwrap().expect("line should parse");

    // Assert
    assert_eq!(record.remote_address(), "93.180.71.3");
    assert_eq!(record.remote_user(), "-");
    assert_eq!(record.date(), NaiveDate::from_ymd_opt(2015, 5, 17).unwrap());
    assert_eq!(record.request_line(), "GET /downloads/product_1 HTTP/1.1");
    assert_eq!(record.request_resource(), "/downloads/product_1");
    assert_eq!(record.request_protocol(), Some("HTTP/1.1"));
    assert_eq!(record.status(), 200);
    assert_eq!(record.body_bytes_sent(), 100);
    assert_eq!(record.http_referer(), "-");
    assert_eq!(
        record.http_user_agent(),
        "Debian APT-HTTP/1.3 (0.8.16~exp12ubuntu10.21)"
    );
}

#[test]
fn keeps_local_date_regardless_of_offset() {
    // Arrange
    let parser = LineParser::new();
    let line = r#"10.0.0.1 - bob [01/Jan/2024:23:30:00 -0500] "GET / HTTP/2.0" 304 0 "" """#;

    // Act
    let record = parser.parse(line).unwrap().unwrap();

    // Assert
    assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(record.remote_user(), "bob");
    assert_eq!(record.http_referer(), "");
}

#[test]
fn blank_lines_yield_no_record() {
    // Arrange
    let (parser, sink) = parser_with_sink();

    // Act
    let empty = parser.parse("").unwrap();
    let spaces = parser.parse("   \t ").unwrap();

    // Assert
    assert!(empty.is_none());
    assert!(spaces.is_none());
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::BlankLine, Diagnostic::BlankLine]
    );
}

#[test]
fn structural_mismatch_yields_no_record() {
    // Arrange
    let (parser, sink) = parser_with_sink();
    let lines = [
        "this is not an access log line",
        // missing user agent
        r#"93.180.71.3 - - [17/May/2015:08:05:32 +0000] "GET / HTTP/1.1" 200 100 "-""#,
        // status is not three digits
        r#"93.180.71.3 - - [17/May/2015:08:05:32 +0000] "GET / HTTP/1.1" 20 100 "-" "ua""#,
        // hostname instead of address
        r#"example.com - - [17/May/2015:08:05:32 +0000] "GET / HTTP/1.1" 200 100 "-" "ua""#,
        // empty request
        r#"93.180.71.3 - - [17/May/2015:08:05:32 +0000] "" 200 100 "-" "ua""#,
    ];

    for line in lines {
        // Act
        let result = parser.parse(line);

        // Assert
        assert!(matches!(result, Ok(None)), "expected skip for {line}");
    }
    assert_eq!(sink.diagnostics().len(), lines.len());
    assert!(
        sink.diagnostics()
            .iter()
            .all(|d| matches!(d, Diagnostic::UnmatchedLine { .. }))
    );
}

#[test]
fn garbage_timestamp_is_a_hard_failure() {
    // Arrange
    let (parser, sink) = parser_with_sink();
    let line = r#"93.180.71.3 - - [not-a-date] "GET /downloads/product_1 HTTP/1.1" 200 100 "-" "Debian APT-HTTP/1.3""#;

    // Act
    let err = parser.parse(line).unwrap_err();

    // Assert
    match err {
        ParseError::Timestamp { raw, .. } => assert_eq!(raw, "not-a-date"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::InvalidTimestamp {
            raw: "not-a-date".to_string()
        }]
    );
}

#[test]
fn unknown_month_is_a_hard_failure() {
    let parser = LineParser::new();
    let line = r#"93.180.71.3 - - [17/Mai/2015:08:05:32 +0000] "GET / HTTP/1.1" 200 100 "-" "ua""#;

    assert!(matches!(
        parser.parse(line),
        Err(ParseError::Timestamp { .. })
    ));
}

#[test]
fn overflowing_body_size_is_a_hard_failure() {
    let parser = LineParser::new();
    let line = r#"93.180.71.3 - - [17/May/2015:08:05:32 +0000] "GET / HTTP/1.1" 200 99999999999999999999999 "-" "ua""#;

    assert!(matches!(
        parser.parse(line),
        Err(ParseError::BodyBytes { .. })
    ));
}

#[test]
fn request_without_protocol_has_no_protocol() {
    let parser = LineParser::new();
    let line = r#"1.2.3.4 - - [17/May/2015:08:05:32 +0000] "GET /health" 200 2 "-" "ua""#;

    let record = parser.parse(line).unwrap().unwrap();

    assert_eq!(record.request_resource(), "/health");
    assert_eq!(record.request_protocol(), None);
}

#[test]
fn single_token_request_is_its_own_resource() {
    let parser = LineParser::new();
    let line = r#"1.2.3.4 - - [17/May/2015:08:05:32 +0000] "-" 400 0 "-" "-""#;

    let record = parser.parse(line).unwrap().unwrap();

    assert_eq!(record.request_resource(), "-");
    assert_eq!(record.request_protocol(), None);
}

#[test]
fn blank_request_has_empty_resource() {
    let parser = LineParser::new();
    let line = r#"1.2.3.4 - - [17/May/2015:08:05:32 +0000] "   " 400 0 "-" "-""#;

    let record = parser.parse(line).unwrap().unwrap();

    assert_eq!(record.request_resource(), "");
    assert_eq!(record.request_protocol(), None);
}
