use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse date {raw}: {source}")]
    Timestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid status code {raw}: {source}")]
    Status {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid response size {raw}: {source}")]
    BodyBytes {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StatsError {
    #[error("percentile must be between 0 and 100, got {0}")]
    PercentileOutOfRange(f64),
}
