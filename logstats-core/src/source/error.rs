use crate::access_log::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    // Discovery
    #[error("invalid path: {pattern}")]
    NoMatchingFiles { pattern: String },

    #[error("unsupported log file {path}: only .log and .txt files can be read")]
    UnsupportedExtension { path: PathBuf },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    // Reading
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name} at line {line}: {source}")]
    Parse {
        name: String,
        line: usize,
        #[source]
        source: ParseError,
    },

    // Remote
    #[error("failed to fetch remote resource {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error occurred with GET {url}, status code: {status}")]
    Status { url: String, status: u16 },
}
