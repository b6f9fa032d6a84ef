use logstats_core::cli::AnalyzeArgs;
use logstats_core::export::ExportFormat;
use std::path::{Path, PathBuf};

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn read_fixture(file: &str) -> String {
    std::fs::read_to_string(fixture_path(file)).expect("failed to read fixture")
}

pub fn analyze_args(path: &str, format: ExportFormat, output: &Path) -> AnalyzeArgs {
    AnalyzeArgs {
        path: path.to_string(),
        format,
        output: output.to_path_buf(),
        from: None,
        to: None,
    }
}
