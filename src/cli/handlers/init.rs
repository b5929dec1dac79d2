// src/cli/handlers/init.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use colored::Colorize;

use crate::{
    cli::handlers::commons::SAMPLE_CONFIG,
    constants::{CONFIG_FILENAME, RESOURCES_DIR},
};

/// The main handler for the `init` command.
///
/// Writes a starter configuration to `resources/config.json`, the first
/// location the default discovery chain checks, so a fresh `cmdpost list`
/// picks it up immediately.
pub fn handle(path_override: Option<&str>, force: bool) -> Result<()> {
    let destination = match path_override {
        Some(path) => PathBuf::from(path),
        None => Path::new(RESOURCES_DIR).join(CONFIG_FILENAME),
    };

    if destination.exists() && !force {
        return Err(anyhow!(
            "'{}' already exists. Use --force to overwrite it.",
            destination.display()
        ));
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Could not create directory '{}'.", parent.display())
            })?;
        }
    }

    fs::write(&destination, format!("{}\n", SAMPLE_CONFIG))
        .with_context(|| format!("Could not write '{}'.", destination.display()))?;

    println!("\n{}", "Success!".green().bold());
    println!("  Configuration created at: {}", destination.display());
    println!(
        "  Edit it to define your own commands, then verify with: {}",
        "cmdpost list".cyan()
    );

    Ok(())
}

// MARK: --- UNIT TESTS ---
