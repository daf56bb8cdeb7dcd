pub mod check;
pub mod completion;
pub mod config;
pub mod fix;
pub mod generate;

use std::path::Path;

use regexmap_core::Table;

/// Load the table for `cmd`, reporting failures on stderr.
pub(crate) fn load_table(cmd: &str, path: &Path) -> Option<Table> {
    match Table::load(path) {
        Ok(t) => Some(t),
        Err(e) => {
            eprintln!("regexmap {cmd}: {e}");
            None
        }
    }
}
