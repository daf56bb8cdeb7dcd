use crate::OutputFormatter;
use regexmap_core::types::CheckReport;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_findings(&self, report: &CheckReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
}
