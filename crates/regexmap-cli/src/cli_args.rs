use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "regexmap",
    version,
    about = "Build and validate char regex maps for jump navigation"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output check results as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log progress to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Report patterns containing letters other than their key
    Check {
        /// Path to the regex map JSON
        #[arg(value_name = "REGEXMAP_JSON")]
        table: PathBuf,
        /// Also print the repaired table
        #[arg(short = 'x', long)]
        fix: bool,
    },

    /// Strip foreign letters and print the repaired table
    Fix {
        /// Path to the regex map JSON
        #[arg(value_name = "REGEXMAP_JSON")]
        table: PathBuf,
        /// Rewrite the file in place instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// Build a table by querying the conversion engine for a..z
    Generate {
        #[command(flatten)]
        engine: EngineArgs,
        /// Write the table to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective generator configuration
    Config {
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Conversion engine settings layered over `regexmap.json`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct EngineArgs {
    /// Config file (default: ./regexmap.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Conversion dictionary path
    #[arg(long, env = "REGEXMAP_DICT", value_name = "PATH")]
    pub dict: Option<String>,
    /// Engine command line; `{dict}` is replaced by the dictionary path
    #[arg(long = "command", env = "REGEXMAP_COMMAND", value_name = "CMD")]
    pub engine_command: Option<String>,
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
