//! Access Log Pipeline
//!
//! This module turns raw access log lines into a statistical summary.
//!
//! Every line goes through the same two steps. The parser checks the line against the
//! combined log format and, when it fits, pulls out the fields into a [`LogRecord`]. The
//! aggregator then folds that record into its running counters, provided the record's
//! date falls inside the requested window.
//!
//! Lines that don't look like access log entries are skipped, and so are records outside
//! the window. Neither is an error; both are reported to the [`DiagnosticSink`] and the run
//! carries on. A line that has the right shape but a timestamp that can't be read is a
//! different story: that is treated as corrupt input and aborts the run.
//!
//! Once every line has been read, `finalize` derives the summary: averages, the 95th
//! percentile of response sizes, the top requested resources, status code counts and
//! the per-day distribution.
//!
//! The percentile is exact, which means every accepted response size is kept in memory
//! until the end of the run. Memory therefore grows with the number of accepted records.
//! A streaming estimator (t-digest, KLL) would bound that, at the cost of approximate
//! answers.
//!
//! The overall data processing architecture is:
//!
//! raw line
//! LineParser
//! LogRecord
//! StatsAggregator
//! Stats
//! StatsRenderer
//!

mod constants;
mod diagnostics;
mod error;
mod metrics;
mod parse;
mod stats;
mod stats_aggregation;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use constants::{RESPONSE_SIZE_PERCENTILE, TIMESTAMP_FORMAT, TOP_RESOURCES_LIMIT};
pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use error::{ParseError, StatsError};
pub use metrics::{Percentile, average, percent, percentile};
pub use parse::LineParser;
pub use stats::{DailyRequests, ResourceCount, ResponseCodeCount, ResponseSizeStats, Stats};
pub use stats_aggregation::StatsAggregator;
pub use types::{LogFields, LogRecord};
pub use window::DateWindow;
