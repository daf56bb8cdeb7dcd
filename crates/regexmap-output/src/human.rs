use crate::OutputFormatter;
use regexmap_core::types::{CheckReport, CheckStatus};

pub const CONTAMINATED_MSG: &str =
    "contamination found: some patterns contain letters other than their key";
pub const CLEAN_MSG: &str = "no contamination: every pattern only contains its own key letter";

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_findings(&self, report: &CheckReport) -> String {
        let mut out = match report.status {
            CheckStatus::Clean => CLEAN_MSG.to_string(),
            CheckStatus::Contaminated => {
                let dump = serde_json::to_string_pretty(&report.findings).unwrap_or_default();
                format!("{CONTAMINATED_MSG}\n{dump}")
            }
        };
        // `check --fix`: the repaired document follows, ready to write back.
        if let Some(repaired) = &report.repaired {
            out.push('\n');
            out.push_str(&self.format_table(repaired));
        }
        out
    }
}
