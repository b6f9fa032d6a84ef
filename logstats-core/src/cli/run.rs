use crate::access_log::{
    DateWindow, DiagnosticSink, LineParser, Stats, StatsAggregator, TracingSink,
};
use crate::cli::{AnalyzeArgs, ExitStatus, RunError, validate};
use crate::export::export;
use crate::source::{LogSource, ingest};
use owo_colors::OwoColorize;
use std::sync::Arc;

/// Runs the whole pipeline and prints the outcome.
pub fn run(args: &AnalyzeArgs) -> ExitStatus {
    match execute(args) {
        Ok(stats) => {
            println!("✔ {} file(s) analyzed", stats.files.len());
            println!("✔ {} requests counted", stats.total_requests_count);
            println!(
                "✔ {} report written to {}",
                args.format,
                args.output.display()
            );
            ExitStatus::Ok
        }
        Err(e) => {
            let status = e.exit_status();
            tracing::error!(error = %e, code = status.code(), "run failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            status
        }
    }
}

pub fn execute(args: &AnalyzeArgs) -> Result<Stats, RunError> {
    execute_with_sink(args, Arc::new(TracingSink))
}

/// Like [`execute`], with parser and aggregator diagnostics sent to `sink`.
pub fn execute_with_sink(
    args: &AnalyzeArgs,
    sink: Arc<dyn DiagnosticSink>,
) -> Result<Stats, RunError> {
    validate(args)?;

    let sources = LogSource::resolve(&args.path)?;
    tracing::info!(path = %args.path, sources = sources.len(), "resolved log sources");

    let parser = LineParser::with_sink(sink.clone());
    let mut aggregator = StatsAggregator::with_sink(DateWindow::new(args.from, args.to), sink);
    ingest(&sources, &parser, &mut aggregator)?;

    let stats = aggregator.finalize();
    export(args.format, &args.output, &stats)?;

    Ok(stats)
}
