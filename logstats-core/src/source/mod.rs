//! Log sources
//!
//! A source is either a file on disk or a URL. The `--path` argument resolves to one
//! remote source, or to every local log file matching an exact path or glob pattern.
//! Each source is opened as a stream of lines and read one line at a time, so only
//! the current line of raw text is ever held in memory.

mod constants;
mod discover;
mod error;
mod ingest;
mod remote;


pub use discover::{discover, find_log_files, resolve_glob};
pub use error::SourceError;
pub use ingest::{ingest, ingest_lines, ingest_source};
pub use remote::{fetch, fetch_with_timeout};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    Local(PathBuf),
    Remote(String),
}

impl LogSource {
    /// Resolves a user supplied path into the sources it names.
    pub fn resolve(path: &str) -> Result<Vec<LogSource>, SourceError> {
        if is_remote(path) {
            return Ok(vec![LogSource::Remote(path.to_string())]);
        }

        Ok(find_log_files(path)?
            .into_iter()
            .map(LogSource::Local)
            .collect())
    }

    /// Identifier reported in the stats: the file name for local files, the URL otherwise.
    pub fn name(&self) -> String {
        match self {
            LogSource::Local(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            LogSource::Remote(url) => url.clone(),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        match self {
            LogSource::Local(path) => {
                let file = File::open(path).map_err(|source| SourceError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            LogSource::Remote(url) => Ok(Box::new(BufReader::new(fetch(url)?))),
        }
    }
}

pub fn is_remote(path: &str) -> bool {
    path.starts_with("http")
}
