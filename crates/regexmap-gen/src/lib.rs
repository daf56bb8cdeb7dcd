//! Table generation for regexmap.
//!
//! Queries a conversion engine once per letter `a`..=`z`, pulls the leading
//! character class out of its reply, and assembles the results into a
//! [`Table`](regexmap_core::Table).

pub mod engine;
pub mod generator;
pub mod parse;

pub use engine::{ConversionEngine, EngineReply, ShellEngine};
pub use generator::generate;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to launch conversion engine `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("conversion engine `{command}` is unavailable (exit status {code})")]
    EngineUnavailable { command: String, code: i32 },
}
