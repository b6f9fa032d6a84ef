use crate::access_log::metrics::Percentile;

/// `$remote_addr - $remote_user [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
pub const LINE_PATTERN: &str =
    r#"^([0-9.]+) - (\S+) \[([^\]]+)\] "([^"]+)" ([0-9]{3}) ([0-9]+) "([^"]*)" "([^"]*)"$"#;

/// Format of `$time_local`, e.g. `17/May/2015:08:05:32 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub const TOP_RESOURCES_LIMIT: usize = 10;

pub const RESPONSE_SIZE_PERCENTILE: Percentile = Percentile::P95;
