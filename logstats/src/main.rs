use clap::Parser;
use logstats_core::cli::{AnalyzeArgs, ExitStatus, run};
use logstats_core::logging::init_logging;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "logstats",
    version,
    about = "Summarizes NGINX access logs into a JSON, Markdown or AsciiDoc report"
)]
struct Cli {
    #[command(flatten)]
    args: AnalyzeArgs,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let status = if e.use_stderr() {
                ExitStatus::InvalidArguments
            } else {
                ExitStatus::Ok
            };
            // --help and --version land here too.
            let _ = e.print();
            return status.into();
        }
    };

    init_logging();
    tracing::info!(path = %cli.args.path, format = %cli.args.format, "starting analysis");

    run(&cli.args).into()
}
