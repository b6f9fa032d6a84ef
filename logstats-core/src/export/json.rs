use crate::access_log::Stats;
use crate::export::{ExportError, StatsRenderer};

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl StatsRenderer for JsonRenderer {
    fn render(&self, stats: &Stats) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(stats)?)
    }
}
