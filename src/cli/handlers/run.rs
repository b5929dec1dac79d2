// src/cli/handlers/run.rs

use anyhow::{Result, anyhow};
use colored::Colorize;

use crate::{
    cli::{console::ConsoleReporter, handlers::commons},
    system::executor::Executor,
};

/// The main handler for the `run` command.
///
/// Resolves the configuration, locates the referenced entry and executes
/// it. The entry's own `interactive` flag decides the mode unless the
/// user overrides it from the command line.
pub fn handle(
    config_override: Option<&str>,
    reference: &str,
    background: bool,
    terminal: bool,
) -> Result<()> {
    let mut reporter = ConsoleReporter;
    let resolved = commons::resolver_for(config_override).resolve(&mut reporter)?;

    let entry = commons::find_entry(&resolved.entries, reference).ok_or_else(|| {
        anyhow!(
            "Command '{}' not found in '{}'. Run 'cmdpost list' to see what is configured.",
            reference.cyan(),
            resolved.source.yellow()
        )
    })?;

    let interactive = if background {
        false
    } else if terminal {
        true
    } else {
        entry.interactive
    };

    let outcome = Executor::new().execute(&entry.title, &entry.command, interactive, &mut reporter);
    if !outcome.is_success() {
        return Err(anyhow!("Command '{}' failed to launch.", entry.title.cyan()));
    }
    Ok(())
}
