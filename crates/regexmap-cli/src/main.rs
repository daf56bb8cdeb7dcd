//! regexmap CLI — build and validate char regex maps for jump navigation.
//!
//! This binary provides the `regexmap` command with subcommands for checking,
//! repairing, and generating the `aceJump.finder.charRegexMap` table. See
//! `regexmap --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod logging;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let formatter: Box<dyn regexmap_output::OutputFormatter> = if cli.json {
        Box::new(regexmap_output::json::JsonFormatter)
    } else {
        Box::new(regexmap_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { table, fix } => commands::check::run(&*formatter, &table, fix),
        Commands::Fix { table, write } => commands::fix::run(&*formatter, &table, write),
        Commands::Generate { engine, output } => commands::generate::run(&*formatter, engine, output),
        Commands::Config { engine } => commands::config::run(engine),
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    std::process::exit(exit_code);
}
