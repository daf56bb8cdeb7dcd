use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli_args::Cli;

/// Run `regexmap completion <shell>` — write the completion script to stdout.
///
/// Unsupported shell names never reach here; clap rejects them while parsing.
pub fn run(shell: Shell) -> i32 {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
    0
}
