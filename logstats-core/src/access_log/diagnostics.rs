use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

/// Something the parser or aggregator noticed without failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    BlankLine,
    UnmatchedLine {
        line: String,
    },
    InvalidTimestamp {
        raw: String,
    },
    OutsideWindow {
        date: NaiveDate,
    },
    WindowConfigured {
        from: NaiveDate,
        to: NaiveDate,
    },
    Finalized {
        total_requests: u64,
        resources: usize,
        dates: usize,
        protocols: usize,
    },
}

/// Receives diagnostics from a [`LineParser`](super::LineParser) or
/// [`StatsAggregator`](super::StatsAggregator).
///
/// Each instance gets its own sink, so two pipelines in one process never share
/// diagnostic state.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::BlankLine => {
                tracing::debug!(event = "line_skipped", reason = "blank", "skipping blank line");
            }
            Diagnostic::UnmatchedLine { line } => {
                tracing::debug!(
                    event = "line_skipped",
                    reason = "unmatched",
                    line = %line,
                    "line does not match the access log format"
                );
            }
            Diagnostic::InvalidTimestamp { raw } => {
                tracing::warn!(event = "invalid_timestamp", raw = %raw, "failed to parse date");
            }
            Diagnostic::OutsideWindow { date } => {
                tracing::debug!(
                    event = "record_skipped",
                    reason = "outside_window",
                    date = %date,
                    "record outside date window"
                );
            }
            Diagnostic::WindowConfigured { from, to } => {
                tracing::info!(
                    event = "window_configured",
                    from = %from,
                    to = %to,
                    "stats aggregator initialized"
                );
            }
            Diagnostic::Finalized {
                total_requests,
                resources,
                dates,
                protocols,
            } => {
                tracing::info!(
                    event = "finalized",
                    total_requests,
                    resources,
                    dates,
                    protocols,
                    "final statistics generated"
                );
            }
        }
    }
}

/// Keeps every diagnostic in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    diagnostics: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: Diagnostic) {
        if let Ok(mut diagnostics) = self.diagnostics.lock() {
            diagnostics.push(diagnostic);
        }
    }
}
