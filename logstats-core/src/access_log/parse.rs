use crate::access_log::constants::{LINE_PATTERN, TIMESTAMP_FORMAT};
use crate::access_log::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::access_log::error::ParseError;
use crate::access_log::types::{LogFields, LogRecord};
use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(LINE_PATTERN).expect("access log pattern must compile"));

/// Parses lines of the combined log format into [`LogRecord`]s.
///
/// Lines that don't have the expected shape yield `Ok(None)`. A line that has the
/// right shape but carries an unreadable timestamp or number yields an error: the
/// source is considered corrupt rather than noisy.
pub struct LineParser {
    sink: Arc<dyn DiagnosticSink>,
}

impl LineParser {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn parse(&self, line: &str) -> Result<Option<LogRecord>, ParseError> {
        if line.trim().is_empty() {
            self.sink.record(Diagnostic::BlankLine);
            return Ok(None);
        }

        let Some(captures) = LINE.captures(line) else {
            self.sink.record(Diagnostic::UnmatchedLine {
                line: line.to_string(),
            });
            return Ok(None);
        };

        let date = self.parse_date(&captures[3])?;

        let status = &captures[5];
        let status = status.parse::<u16>().map_err(|source| ParseError::Status {
            raw: status.to_string(),
            source,
        })?;

        let body_bytes_sent = &captures[6];
        let body_bytes_sent =
            body_bytes_sent
                .parse::<u64>()
                .map_err(|source| ParseError::BodyBytes {
                    raw: body_bytes_sent.to_string(),
                    source,
                })?;

        Ok(Some(LogRecord::from(LogFields {
            remote_address: captures[1].to_string(),
            remote_user: captures[2].to_string(),
            date,
            request_line: captures[4].to_string(),
            status,
            body_bytes_sent,
            http_referer: captures[7].to_string(),
            http_user_agent: captures[8].to_string(),
        })))
    }

    /// The date is taken as written in the log, in the server's local offset.
    fn parse_date(&self, raw: &str) -> Result<NaiveDate, ParseError> {
        match DateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
            Ok(ts) => Ok(ts.date_naive()),
            Err(source) => {
                self.sink.record(Diagnostic::InvalidTimestamp {
                    raw: raw.to_string(),
                });
                Err(ParseError::Timestamp {
                    raw: raw.to_string(),
                    source,
                })
            }
        }
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
