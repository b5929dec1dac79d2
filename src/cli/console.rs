// src/cli/console.rs

//! Console rendering for report events.
//!
//! The core resolution and execution code emits its progress through the
//! [`Reporter`] trait without knowing where the text ends up. This module
//! is the CLI's implementation: timestamped, severity-colored lines, each
//! mirrored to the log at a matching level.

use crate::report::{Reporter, Severity};
use chrono::Local;
use colored::Colorize;

/// Prints report events to the console as `[HH:MM:SS] text` lines.
///
/// Loading chatter is dimmed, successes are green, and errors go to
/// stderr in red so they survive a piped stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, severity: Severity, text: &str) {
        let stamped = format!("[{}] {}", Local::now().format("%H:%M:%S"), text);
        match severity {
            Severity::Loading => {
                log::debug!("{}", text);
                println!("{}", stamped.dimmed());
            }
            Severity::Success => {
                log::info!("{}", text);
                println!("{}", stamped.green());
            }
            Severity::Error => {
                log::warn!("{}", text);
                eprintln!("{}", stamped.red());
            }
        }
    }
}
