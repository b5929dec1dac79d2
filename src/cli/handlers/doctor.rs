// src/cli/handlers/doctor.rs

use std::fs;

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::handlers::commons,
    models::PlatformKind,
    report::NullReporter,
    system::{
        platform,
        terminal::{self, BinaryProbe, PathProbe},
    },
};

/// The main handler for the `doctor` command.
///
/// Shows what the launcher would decide on this host: the detected
/// platform, which terminal emulators are reachable, the invocation that
/// would wrap a command, and where the config discovery chain stands.
pub fn handle(config_override: Option<&str>) -> Result<()> {
    let detected = platform::detect();

    println!("\n--- {} ---", "Platform".yellow());
    println!("  {:<15} {}", "Detected:".blue(), detected);

    println!("\n--- {} ---", "Terminal Strategy".yellow());
    if matches!(detected, PlatformKind::Linux | PlatformKind::Unknown) {
        let probe = PathProbe;
        for &(binary, _) in terminal::LINUX_TERMINALS {
            let status = if probe.is_available(binary) {
                "found".green()
            } else {
                "not found".dimmed()
            };
            println!("  {:<22} {}", binary, status);
        }
    }
    let preview = terminal::build_invocation("echo hello", detected);
    println!("  {:<15} {}", "Invocation:".blue(), preview.dimmed());

    println!("\n--- {} ---", "Configuration".yellow());
    let resolver = commons::resolver_for(config_override);
    println!("  {:<15} {}", "Working dir:".blue(), resolver.workdir());
    for path in resolver.candidates() {
        let status = if fs::metadata(path).is_ok() {
            "present".green()
        } else {
            "missing".dimmed()
        };
        println!("  {:<44} {}", path, status);
    }

    // A present file can still be unusable, so run the real resolution
    // quietly and report its verdict.
    let mut reporter = NullReporter;
    match resolver.resolve(&mut reporter) {
        Ok(resolved) => {
            println!(
                "\n  {} {} ({} commands)",
                "Would load:".green(),
                resolved.source,
                resolved.entries.len()
            );
        }
        Err(err) => {
            println!("\n  {} {}", "No usable config:".red(), err);
        }
    }

    Ok(())
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_doctor_succeeds_without_any_config() {
        // Diagnostics must come up even when resolution would fail.
        handle(Some("/nonexistent/doctor-config.json")).unwrap();
    }

    #[test]
    fn test_doctor_succeeds_with_explicit_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Status", "command": "uptime"}}]"#).unwrap();

        handle(Some(file.path().to_str().unwrap())).unwrap();
    }
}
