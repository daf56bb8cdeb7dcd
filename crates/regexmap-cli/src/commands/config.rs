//! `regexmap config` — show the generator settings in effect.
//!
//! Layering, lowest to highest: built-in defaults, `regexmap.json` (or
//! `--config`), then `REGEXMAP_DICT` / `REGEXMAP_COMMAND` and the matching
//! flags.

use std::path::PathBuf;

use regexmap_core::config::{GeneratorConfig, CONFIG_FILE_NAME};

use crate::cli_args::EngineArgs;

pub fn run(engine: EngineArgs) -> i32 {
    let config = resolve(engine);
    match serde_json::to_string_pretty(&config) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("regexmap config: failed to serialize: {}", e);
            2
        }
    }
}

/// Build the effective configuration from file, environment and flags.
pub(crate) fn resolve(engine: EngineArgs) -> GeneratorConfig {
    let path = engine
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    tracing::debug!(path = %path.display(), "loading config");
    GeneratorConfig::load(&path).with_overrides(engine.dict, engine.engine_command)
}
