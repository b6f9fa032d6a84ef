use crate::source::constants::{REMOTE_CONNECT_TIMEOUT, REMOTE_READ_TIMEOUT};
use crate::source::error::SourceError;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

/// Sends a GET for `url` and hands back the response for streaming.
///
/// Any non-success status fails before the body is read.
pub fn fetch(url: &str) -> Result<Response, SourceError> {
    fetch_with_timeout(url, REMOTE_READ_TIMEOUT)
}

/// Like [`fetch`], failing any single read of the response that waits longer than
/// `read_timeout`.
pub fn fetch_with_timeout(url: &str, read_timeout: Duration) -> Result<Response, SourceError> {
    let request_error = |source| SourceError::Request {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .user_agent(concat!("logstats/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(REMOTE_CONNECT_TIMEOUT)
        // The blocking client applies this to each read of the body, not to the whole
        // transfer, so a large but steady log still streams to the end.
        .timeout(read_timeout)
        .build()
        .map_err(request_error)?;

    let response = client.get(url).send().map_err(request_error)?;
    let status = response.status();

    tracing::info!(url, status = status.as_u16(), "remote source responded");

    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}
