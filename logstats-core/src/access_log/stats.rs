use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Final summary of a run. This is what the report renderers consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub files: Vec<String>,
    pub total_requests_count: u64,
    pub response_size_in_bytes: ResponseSizeStats,
    /// Most requested resources, highest count first.
    pub resources: Vec<ResourceCount>,
    pub response_codes: Vec<ResponseCodeCount>,
    /// One entry per day with at least one request, oldest first.
    pub requests_per_date: Vec<DailyRequests>,
    pub unique_protocols: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSizeStats {
    pub average: f64,
    pub max: u64,
    pub p95: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCount {
    pub resource: String,
    pub total_requests_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCodeCount {
    pub code: u16,
    pub total_responses_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRequests {
    pub date: NaiveDate,
    /// Full English weekday name, e.g. `Sunday`.
    pub weekday: String,
    pub total_requests_count: u64,
    pub total_requests_percentage: f64,
}
