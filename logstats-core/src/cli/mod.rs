//! Command line surface
//!
//! `logstats` takes everything it needs from flags: where the logs are, which report
//! format to produce, where to write it, and an optional inclusive date range.
//!
//! A run goes through these steps:
//!
//! AnalyzeArgs
//! validate
//! LogSource::resolve
//! ingest
//! StatsAggregator::finalize
//! export
//! ExitStatus
//!

mod error;
mod exit;
mod run;
mod validate;

#[cfg(test)]
mod tests;

pub use error::{ArgumentError, RunError};
pub use exit::ExitStatus;
pub use run::{execute, execute_with_sink, run};
pub use validate::validate;

use crate::export::ExportFormat;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Log file, glob pattern (e.g. `logs/*.log`) or http(s) URL
    #[arg(short, long)]
    pub path: String,

    /// Report format: json, markdown or adoc
    #[arg(short, long)]
    pub format: ExportFormat,

    /// Report file to create; must not exist yet
    #[arg(short, long)]
    pub output: PathBuf,

    /// First day to include, as YYYY-MM-DD
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to include, as YYYY-MM-DD
    #[arg(long)]
    pub to: Option<NaiveDate>,
}
