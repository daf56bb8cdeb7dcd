//! The char regex map document.
//!
//! On disk a table is a JSON object with a single well-known field whose value
//! maps a key letter to a character-class pattern:
//!
//! ```json
//! { "aceJump.finder.charRegexMap": { "a": "[aAあア]", "k": "[kKかカ]" } }
//! ```
//!
//! Entry order is preserved from load to save.

use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::types::TableError;

/// Top-level field the editor settings file stores the map under.
pub const CHAR_REGEX_MAP_KEY: &str = "aceJump.finder.charRegexMap";

/// Mapping from a key letter to the pattern a jump for that letter should use.
///
/// Keys are kept as opaque strings: a malformed key is carried through
/// untouched rather than rejected. Serializes as the bare key -> pattern map,
/// without the top-level field; see [`Table::to_document`] for the full form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    entries: IndexMap<String, String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the pattern for `key`, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, pattern: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), pattern.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse a table document from JSON text.
    ///
    /// Fields other than [`CHAR_REGEX_MAP_KEY`] are ignored.
    pub fn from_json_str(text: &str) -> Result<Self, TableError> {
        let doc: Value = serde_json::from_str(text)?;
        Self::from_document(&doc)
    }

    /// Extract the table from an already-parsed document.
    pub fn from_document(doc: &Value) -> Result<Self, TableError> {
        let root = doc.as_object().ok_or(TableError::NotAnObject)?;
        let map = root
            .get(CHAR_REGEX_MAP_KEY)
            .ok_or(TableError::MissingRoot(CHAR_REGEX_MAP_KEY))?
            .as_object()
            .ok_or(TableError::RootNotAnObject(CHAR_REGEX_MAP_KEY))?;

        let mut table = Table::new();
        for (key, value) in map {
            let pattern = value
                .as_str()
                .ok_or_else(|| TableError::PatternNotAString { key: key.clone() })?;
            table.insert(key.clone(), pattern);
        }
        Ok(table)
    }

    /// Read and parse a table document from disk.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let text = std::fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), entries = table.len(), "loaded table");
        Ok(table)
    }

    /// Wrap the entries under [`CHAR_REGEX_MAP_KEY`].
    pub fn to_document(&self) -> Value {
        let entries: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let mut root = Map::new();
        root.insert(CHAR_REGEX_MAP_KEY.to_string(), Value::Object(entries));
        Value::Object(root)
    }

    /// Render the document with 2-space indentation. Non-ASCII characters are
    /// written as-is.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_document()).unwrap_or_default()
    }

    /// Atomically replace `path` with this table's document.
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let write_err = |source| TableError::Write {
            path: path.to_path_buf(),
            source,
        };
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(write_err)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
        temp.write_all(self.to_json_pretty().as_bytes())
            .map_err(write_err)?;
        temp.write_all(b"\n").map_err(write_err)?;

        // The temp file is created 0600; keep whatever mode the target had.
        if let Ok(existing) = std::fs::metadata(path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?;
        }
        temp.persist(path).map_err(|e| write_err(e.error))?;

        tracing::debug!(path = %path.display(), entries = self.len(), "saved table");
        Ok(())
    }
}

impl FromIterator<(String, String)> for Table {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
