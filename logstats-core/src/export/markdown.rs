use crate::access_log::Stats;
use crate::export::{ExportError, StatsRenderer};
use http::StatusCode;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Three `####` sections, each holding one table.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl StatsRenderer for MarkdownRenderer {
    fn render(&self, stats: &Stats) -> Result<String, ExportError> {
        let mut out = String::new();

        section(&mut out, "General Information");
        out.push_str("| Metric | Value |\n");
        out.push_str("|:-------|:------|\n");
        row(&mut out, &["Files", &escape(&stats.files.join(", "))]);
        row(
            &mut out,
            &["Total Requests", &stats.total_requests_count.to_string()],
        );
        let sizes = &stats.response_size_in_bytes;
        row(
            &mut out,
            &["Average Response Size", &format_bytes(sizes.average)],
        );
        row(
            &mut out,
            &["95th Percentile Response Size", &format_bytes(sizes.p95)],
        );
        row(
            &mut out,
            &["Max Response Size", &format_bytes(sizes.max as f64)],
        );
        out.push('\n');

        section(&mut out, "Requested Resources");
        out.push_str("| Resource | Request Count |\n");
        out.push_str("|:---------|:--------------|\n");
        for r in &stats.resources {
            row(
                &mut out,
                &[&escape(&r.resource), &r.total_requests_count.to_string()],
            );
        }
        out.push('\n');

        section(&mut out, "Response Codes");
        out.push_str("| Code | Description | Count |\n");
        out.push_str("|:----:|:------------|------:|\n");
        for c in &stats.response_codes {
            row(
                &mut out,
                &[
                    &c.code.to_string(),
                    status_description(c.code),
                    &c.total_responses_count.to_string(),
                ],
            );
        }

        Ok(out)
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("#### {title}\n\n"));
}

fn row(out: &mut String, cells: &[&str]) {
    out.push_str(&format!("| {} |\n", cells.join(" | ")));
}

// Pipes would otherwise split the cell.
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

pub(crate) fn format_bytes(bytes: f64) -> String {
    if bytes < KIB {
        format!("{:.0} B", round_half_up(bytes, 0))
    } else if bytes < MIB {
        format!("{:.2} KB", round_half_up(bytes / KIB, 2))
    } else {
        format!("{:.2} MB", round_half_up(bytes / MIB, 2))
    }
}

// `{:.N}` alone rounds ties to even.
fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale + 0.5).floor() / scale
}

pub(crate) fn status_description(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown")
}
