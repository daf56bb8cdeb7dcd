use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::check::Findings;
use crate::table::Table;

/// Result of a `check` run, as handed to the output formatters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub version: String,
    pub command: String,
    pub status: CheckStatus,
    pub findings: Findings,
    /// Repaired map, present only when a fix was requested and needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repaired: Option<Table>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Clean,
    Contaminated,
}

impl CheckReport {
    pub fn new(findings: Findings) -> Self {
        let status = if findings.is_clean() {
            CheckStatus::Clean
        } else {
            CheckStatus::Contaminated
        };
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".into(),
            status,
            findings,
            repaired: None,
        }
    }

    /// Attach the repaired form of `table`. A clean report stays untouched so
    /// that a fix request on a clean table produces no repaired output.
    pub fn with_repair(mut self, table: &Table) -> Self {
        if !self.findings.is_clean() {
            self.repaired = Some(crate::repair::repair(table, &self.findings));
        }
        self
    }
}

/// Errors that can occur while loading or persisting a table document.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document root is not a JSON object")]
    NotAnObject,

    #[error("missing top-level field \"{0}\"")]
    MissingRoot(&'static str),

    #[error("field \"{0}\" is not a JSON object")]
    RootNotAnObject(&'static str),

    #[error("pattern for key \"{key}\" is not a string")]
    PatternNotAString { key: String },
}
