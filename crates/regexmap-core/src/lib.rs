//! Core types, table storage, and validation for regexmap.
//!
//! This crate provides the pieces every other regexmap crate builds on:
//! - [`table`] — The [`Table`](table::Table) document and its JSON persistence
//! - [`check`] — Contamination detection over a table
//! - [`repair`] — Stripping offending letters from flagged patterns
//! - [`config`] — Generator configuration loading from `regexmap.json`
//! - [`types`] — Error types

pub mod check;
pub mod config;
pub mod repair;
pub mod table;
pub mod types;

pub use check::{check, Findings};
pub use repair::repair;
pub use table::{Table, CHAR_REGEX_MAP_KEY};
