// src/cli/handlers/list.rs

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::{console::ConsoleReporter, handlers::commons},
    core::config_resolver::ResolveError,
    models::CommandEntry,
};

/// The main handler for the `list` command.
///
/// Renders the resolved command list. A missing configuration is not a
/// CLI failure here: the launcher still comes up, showing setup
/// instructions instead of actions.
pub fn handle(config_override: Option<&str>) -> Result<()> {
    let mut reporter = ConsoleReporter;
    match commons::resolver_for(config_override).resolve(&mut reporter) {
        Ok(resolved) => {
            print_entries(&resolved.entries, &resolved.source);
        }
        Err(err) => {
            print_setup_instructions(&err);
        }
    }
    Ok(())
}

fn print_entries(entries: &[CommandEntry], source: &str) {
    if entries.is_empty() {
        println!("\n{}", "⚠️ No Commands Available".yellow().bold());
        println!("{}", "Config file is empty.".yellow());
        println!("\nAdd entries to '{}' and run {} again.", source, "cmdpost list".cyan());
        return;
    }

    println!("\n--- {} ---", "Available Commands".yellow());
    println!("  {:<10} {}", "Source:".blue(), source);
    println!();

    for (index, entry) in entries.iter().enumerate() {
        let mode = if entry.interactive {
            "terminal".cyan()
        } else {
            "background".dimmed()
        };
        println!(
            "  {:>3}. {} [{}]",
            index + 1,
            format!("{:<32}", entry.title).bold(),
            mode
        );
        println!("       {}", entry.command.dimmed());
    }

    println!("\nRun one with: {}", "cmdpost run <title or number>".cyan());
}

/// The full walkthrough shown when no candidate path produced a usable
/// config. Mirrors what the resolver already reported, but organized as
/// an action plan rather than a log.
fn print_setup_instructions(err: &ResolveError) {
    let ResolveError::NotFound {
        workdir,
        attempted,
        last_error,
    } = err;

    println!("\n{}", "⚠️ No Commands Available".yellow().bold());
    println!("{}", "Config file not found or empty.".yellow());

    println!("\n{}", "CONFIG FILE NOT FOUND!".red().bold());
    println!("\nA config.json file is required to define your commands.");

    println!("\n{}", "LOCATIONS SEARCHED:".blue());
    for path in attempted {
        println!("  • {}", path);
    }

    println!("\n{} {}", "CURRENT WORKING DIRECTORY:".blue(), workdir);

    println!("\n{}", "RECOMMENDED ACTION:".blue());
    println!("Create a config.json file in one of the searched locations with this format:");
    println!("\n{}\n", commons::SAMPLE_CONFIG);

    println!("{}", "FIELD DESCRIPTIONS:".blue());
    println!("  • title: Display name for the command");
    println!("  • command: Shell command to execute");
    println!("  • interactive: true = opens in terminal, false = runs in background");

    println!("\n{}", "QUICKEST FIX:".blue());
    println!("Most likely location: {}/resources/config.json", workdir);
    println!("Or let the launcher write a starter file: {}", "cmdpost init".cyan());

    println!("\n{} {}", "ERROR DETAILS:".blue(), last_error.dimmed());
}
