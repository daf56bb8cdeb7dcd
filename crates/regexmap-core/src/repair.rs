//! Repair of contaminated patterns.
//!
//! Removal is purely textual: every occurrence of an offending character is
//! dropped from the pattern and nothing else is touched. The result is not
//! re-validated as a regex.

use std::collections::BTreeSet;

use crate::check::Findings;
use crate::table::Table;

/// Build a new table with every flagged pattern stripped of its offending
/// letters. Unflagged entries are copied verbatim and the key set never
/// changes.
pub fn repair(table: &Table, findings: &Findings) -> Table {
    table
        .iter()
        .map(|(key, pattern)| {
            let fixed = match findings.get(key) {
                Some(others) => {
                    let stripped = strip_letters(pattern, others);
                    tracing::debug!(key, before = pattern, after = %stripped, "repaired entry");
                    stripped
                }
                None => pattern.to_string(),
            };
            (key.to_string(), fixed)
        })
        .collect()
}

/// Remove every occurrence of each character in `others` from `pattern`.
pub fn strip_letters(pattern: &str, others: &BTreeSet<char>) -> String {
    pattern.chars().filter(|c| !others.contains(c)).collect()
}
