use std::path::Path;

use regexmap_core::types::CheckReport;
use regexmap_output::OutputFormatter;

/// Run `regexmap check <table>` — report contaminated patterns.
///
/// Contamination is a reportable result, not a failure: exit code is 0 either
/// way. With `--fix` the repaired table is carried in the same report, so
/// `--json` output stays a single document.
pub fn run(formatter: &dyn OutputFormatter, path: &Path, fix: bool) -> i32 {
    let Some(table) = super::load_table("check", path) else {
        return 2;
    };

    let findings = regexmap_core::check(&table);
    tracing::info!(
        entries = table.len(),
        contaminated = findings.len(),
        "checked {}",
        path.display()
    );

    let mut report = CheckReport::new(findings);
    if fix {
        report = report.with_repair(&table);
    }

    let output = formatter.format_findings(&report);
    if !output.is_empty() {
        println!("{}", output);
    }
    0
}
