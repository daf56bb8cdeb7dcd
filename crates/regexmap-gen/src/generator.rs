use regexmap_core::Table;

use crate::engine::ConversionEngine;
use crate::parse::extract_from_lines;
use crate::GenerateError;

/// Query `engine` for each letter `a`..=`z` and collect the classes it returns.
///
/// Letters the engine fails on or has no class for are left out of the table.
/// Only an engine that cannot be launched at all aborts the run.
pub fn generate(engine: &dyn ConversionEngine) -> Result<Table, GenerateError> {
    let mut table = Table::new();
    for letter in 'a'..='z' {
        let key = letter.to_string();
        let reply = engine.query(&key)?;
        if !reply.success {
            tracing::warn!(letter = %key, "skipping letter, engine exited unsuccessfully");
            continue;
        }
        match extract_from_lines(&reply.lines) {
            Some(class) => {
                tracing::debug!(letter = %key, pattern = %class, "extracted class");
                table.insert(key, class);
            }
            None => tracing::warn!(letter = %key, "skipping letter, no character class in reply"),
        }
    }
    tracing::info!(entries = table.len(), "generated table");
    Ok(table)
}
