use std::path::Path;

use regexmap_core::{check, repair};
use regexmap_output::OutputFormatter;

/// Run `regexmap fix <table>`.
///
/// Re-checks the table and, when anything is contaminated, prints the repaired
/// document. With `--write` the file is replaced atomically instead, keeping
/// its permissions. A clean table produces no output.
pub fn run(formatter: &dyn OutputFormatter, path: &Path, write: bool) -> i32 {
    let Some(table) = super::load_table("fix", path) else {
        return 2;
    };

    let findings = check(&table);
    if findings.is_clean() {
        tracing::info!("nothing to fix in {}", path.display());
        return 0;
    }
    let repaired = repair(&table, &findings);

    if !write {
        tracing::info!(repaired = findings.len(), "repaired table");
        println!("{}", formatter.format_table(&repaired));
        return 0;
    }

    match repaired.save(path) {
        Ok(()) => {
            tracing::info!(repaired = findings.len(), "rewrote {}", path.display());
            0
        }
        Err(e) => {
            eprintln!("regexmap fix: {e}");
            2
        }
    }
}
