//! Report rendering
//!
//! Turns the final [`Stats`] into a document and writes it to the output file. The JSON
//! report carries every field; Markdown and AsciiDoc carry the general figures, the top
//! resources and the status codes.

mod adoc;
mod error;
mod format;
mod json;
mod markdown;

#[cfg(test)]
mod tests;

pub use adoc::AdocRenderer;
pub use error::ExportError;
pub use format::ExportFormat;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;

use crate::access_log::Stats;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub trait StatsRenderer {
    fn render(&self, stats: &Stats) -> Result<String, ExportError>;
}

/// Renders `stats` in `format` and writes it to `output`, which must not exist yet.
pub fn export(format: ExportFormat, output: &Path, stats: &Stats) -> Result<(), ExportError> {
    let document = format.renderer().render(stats)?;

    let write_error = |source| ExportError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output)
        .map_err(write_error)?;
    file.write_all(document.as_bytes()).map_err(write_error)?;

    tracing::info!(
        format = %format,
        output = %output.display(),
        bytes = document.len(),
        "report written"
    );
    Ok(())
}
