// src/bin/cmdpost.rs

use anyhow::Result;
use clap::Parser;
use cmdpost::cli::{Cli, Commands, handlers};
use colored::Colorize;

/// The main entry point of the `cmdpost` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Routes the parsed command line to its handler.
fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::List => handlers::list::handle(config),
        Commands::Run {
            reference,
            background,
            terminal,
        } => handlers::run::handle(config, &reference, background, terminal),
        Commands::Exec {
            command,
            background,
        } => handlers::exec::handle(&command, background),
        Commands::Init { path, force } => handlers::init::handle(path.as_deref(), force),
        Commands::Doctor => handlers::doctor::handle(config),
    }
}
