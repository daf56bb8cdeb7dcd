//! Contamination detection.
//!
//! A pattern is contaminated when it contains an ASCII letter that is neither
//! the lower- nor upper-case form of its own key. Digits, punctuation and
//! non-Latin characters are never considered.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Offending letters per key, in table order. Absent keys are clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Findings {
    entries: IndexMap<String, BTreeSet<char>>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<char>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<char>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Record offending letters for `key`. Empty sets are dropped so that
    /// presence always means contamination.
    pub fn insert(&mut self, key: impl Into<String>, letters: BTreeSet<char>) {
        if !letters.is_empty() {
            self.entries.insert(key.into(), letters);
        }
    }
}

/// Scan every entry of `table` and collect the letters that don't belong to
/// their key.
pub fn check(table: &Table) -> Findings {
    let mut findings = Findings::new();
    for (key, pattern) in table.iter() {
        let others = offending_letters(key, pattern);
        if !others.is_empty() {
            tracing::debug!(key, pattern, offending = others.len(), "contaminated entry");
        }
        findings.insert(key, others);
    }
    tracing::debug!(
        entries = table.len(),
        contaminated = findings.len(),
        "check finished"
    );
    findings
}

/// ASCII letters in `pattern` other than `key`'s lower/upper forms.
///
/// The key is compared as a whole string, so a multi-character key has no
/// single-letter variants and every letter in its pattern is reported.
pub fn offending_letters(key: &str, pattern: &str) -> BTreeSet<char> {
    let lower = key.to_lowercase();
    let upper = key.to_uppercase();
    pattern
        .chars()
        .filter(char::is_ascii_alphabetic)
        .filter(|c| {
            let mut buf = [0u8; 4];
            let s: &str = c.encode_utf8(&mut buf);
            s != lower && s != upper
        })
        .collect()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
