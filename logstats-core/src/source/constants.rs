use std::time::Duration;

pub const LOG_FILE_EXTENSIONS: &[&str] = &[".log", ".txt"];
pub const WILDCARDS: &[char] = &['*', '?'];
pub const REMOTE_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Longest wait for the next chunk of a remote body before the read fails.
pub const REMOTE_READ_TIMEOUT: Duration = Duration::from_secs(30);
