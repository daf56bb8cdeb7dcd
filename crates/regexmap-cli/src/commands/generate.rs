use std::path::PathBuf;

use regexmap_gen::{GenerateError, ShellEngine};
use regexmap_output::OutputFormatter;

use crate::cli_args::EngineArgs;

/// Run `regexmap generate` — build a table from the conversion engine.
///
/// Nothing is printed or written unless every letter was queried.
pub fn run(formatter: &dyn OutputFormatter, engine: EngineArgs, output: Option<PathBuf>) -> i32 {
    let config = super::config::resolve(engine);
    let shell = ShellEngine::new(config.resolved_command());
    tracing::info!(command = shell.command(), "querying conversion engine");

    let table = match regexmap_gen::generate(&shell) {
        Ok(t) => t,
        Err(e @ GenerateError::EngineUnavailable { .. }) => {
            eprintln!("regexmap generate: {e}");
            eprintln!("  hint: set --command / REGEXMAP_COMMAND or \"command\" in regexmap.json");
            return 2;
        }
        Err(e) => {
            eprintln!("regexmap generate: {e}");
            return 2;
        }
    };

    match output {
        Some(path) => match table.save(&path) {
            Ok(()) => {
                tracing::info!(entries = table.len(), "wrote {}", path.display());
                0
            }
            Err(e) => {
                eprintln!("regexmap generate: {e}");
                2
            }
        },
        None => {
            println!("{}", formatter.format_table(&table));
            0
        }
    }
}
