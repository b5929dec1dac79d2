// src/cli/handlers/exec.rs

use anyhow::{Result, anyhow};

use crate::{cli::console::ConsoleReporter, system::executor::Executor};

/// The main handler for the `exec` command.
///
/// Runs a raw command line without consulting the configuration. Opens a
/// terminal window by default, matching what a config entry without an
/// explicit mode would do.
pub fn handle(command: &str, background: bool) -> Result<()> {
    let trimmed = command.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("No command specified to run."));
    }

    let mut reporter = ConsoleReporter;
    let outcome = Executor::new().execute(trimmed, trimmed, !background, &mut reporter);
    if !outcome.is_success() {
        return Err(anyhow!("Command failed to launch."));
    }
    Ok(())
}
