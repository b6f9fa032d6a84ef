use crate::access_log::Stats;
use crate::export::{ExportError, StatsRenderer};

#[derive(Debug, Default, Clone, Copy)]
pub struct AdocRenderer;

impl StatsRenderer for AdocRenderer {
    fn render(&self, stats: &Stats) -> Result<String, ExportError> {
        let sizes = &stats.response_size_in_bytes;
        let mut out = String::new();

        out.push_str("---- General Information ----\n");
        out.push_str(&format!("Files: {}\n", stats.files.join(", ")));
        out.push_str(&format!("Total Requests: {}\n", stats.total_requests_count));
        out.push_str(&format!("Average Response Size: {}b\n", decimal(sizes.average)));
        out.push_str(&format!("Max Response Size: {}b\n", decimal(sizes.max as f64)));
        out.push_str(&format!("95th Percentile Size: {}b\n\n", decimal(sizes.p95)));

        if !stats.resources.is_empty() {
            out.push_str("---- Requested Resources ----\n");
            for r in &stats.resources {
                out.push_str(&format!(
                    "- {}: {} requests\n",
                    r.resource, r.total_requests_count
                ));
            }
            out.push('\n');
        }

        if !stats.response_codes.is_empty() {
            out.push_str("---- Status Codes ----\n");
            for c in &stats.response_codes {
                out.push_str(&format!(
                    "- {}: {} responses\n",
                    c.code, c.total_responses_count
                ));
            }
        }

        Ok(out)
    }
}

// Sizes always carry a fractional part, e.g. `200.0`.
fn decimal(value: f64) -> String {
    format!("{value:?}")
}
