use crate::cli::ExitStatus;
use crate::export::ExportError;
use crate::source::SourceError;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("output file already exists: {0}")]
    OutputExists(PathBuf),

    #[error("output directory does not exist: {0}")]
    MissingOutputDirectory(PathBuf),

    #[error("output directory is read-only: {0}")]
    ReadOnlyOutputDirectory(PathBuf),

    #[error("--from ({from}) must be before --to ({to})")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("output file {output} must have the {expected} extension")]
    ExtensionMismatch {
        output: PathBuf,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl RunError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RunError::Export(ExportError::Serialize(_)) => ExitStatus::UnexpectedError,
            _ => ExitStatus::InvalidArguments,
        }
    }
}
