//! Output formatters for regexmap command results.
//!
//! Provides two output modes:
//! - **Human** (default): A verdict line plus a JSON dump of the findings
//! - **JSON** (`--json`): Machine-readable structured output
//!
//! Both modes print a repaired table the same way, as a document that can be
//! written straight back to the settings file.

pub mod human;
pub mod json;

use regexmap_core::types::CheckReport;
use regexmap_core::Table;

pub trait OutputFormatter {
    fn format_findings(&self, report: &CheckReport) -> String;

    fn format_table(&self, table: &Table) -> String {
        table.to_json_pretty()
    }
}
