// src/cli/handlers/commons.rs

// This module contains shared functions used by multiple handlers.

use crate::{core::config_resolver::ConfigResolver, models::CommandEntry};

/// The starter command list written by `init` and shown in the setup
/// instructions when no configuration exists yet.
pub const SAMPLE_CONFIG: &str = r#"[
  {
    "title": "SSH to Production Server",
    "command": "ssh admin@prod-server.com",
    "interactive": true
  },
  {
    "title": "SSH to Staging Server",
    "command": "ssh admin@staging-server.com",
    "interactive": true
  },
  {
    "title": "Interactive MySQL Console",
    "command": "mysql -u root -p",
    "interactive": true
  },
  {
    "title": "Deploy Production",
    "command": "cd /var/www && git pull && npm install",
    "interactive": true
  },
  {
    "title": "Check Server Status",
    "command": "systemctl status nginx",
    "interactive": false
  },
  {
    "title": "View Disk Usage",
    "command": "df -h",
    "interactive": false
  },
  {
    "title": "Memory Usage",
    "command": "free -h",
    "interactive": false
  }
]"#;

/// Builds the resolver the way every handler does: an explicit `--config`
/// path becomes the only candidate, otherwise the default probed chain.
pub fn resolver_for(config_override: Option<&str>) -> ConfigResolver {
    match config_override {
        Some(path) => ConfigResolver::with_override(path),
        None => ConfigResolver::from_environment(),
    }
}

/// Finds the entry a user reference points at.
///
/// Exact title match wins, then case-insensitive title, then a 1-based
/// index into the list. First match in file order is returned.
pub fn find_entry<'a>(entries: &'a [CommandEntry], reference: &str) -> Option<&'a CommandEntry> {
    if let Some(entry) = entries.iter().find(|e| e.title == reference) {
        return Some(entry);
    }

    let lowered = reference.to_lowercase();
    if let Some(entry) = entries.iter().find(|e| e.title.to_lowercase() == lowered) {
        return Some(entry);
    }

    if let Ok(index) = reference.parse::<usize>() {
        if index >= 1 {
            return entries.get(index - 1);
        }
    }

    None
}

// MARK: --- UNIT TESTS ---
