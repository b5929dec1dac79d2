// src/core/config_resolver.rs

//! Discovers and loads the command configuration.
//!
//! The config file can live in several places depending on how the launcher
//! was started (next to the binary, in a `resources/` bundle, or under the
//! probed working directory). The resolver walks a fixed candidate chain
//! first-to-last and the first path that yields a parseable, valid command
//! list wins. Loading fails closed: a candidate that exists but is corrupt
//! is skipped like a missing one, and exhausting the chain is the only
//! error this module surfaces.

use crate::{
    constants::{CONFIG_FILENAME, RESOURCES_DIR, UNKNOWN_WORKDIR},
    core::fallback,
    models::CommandEntry,
    report::{Reporter, Severity},
};
use std::fs;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Every candidate was tried and none produced a valid command list.
    #[error("Config file not found in any location. Last error: {last_error}. Searched paths: {}", .attempted.join(", "))]
    NotFound {
        /// The probed working directory, or `"unknown"` when the probe failed.
        workdir: String,
        /// Every path that was attempted, in order.
        attempted: Vec<String>,
        /// The error of the final attempt.
        last_error: String,
    },
}

/// Why a single candidate was rejected. Internal only; the chain moves on
/// and the text survives in [`ResolveError::NotFound`] if nothing else wins.
#[derive(Error, Debug)]
enum CandidateError {
    #[error("{0}")]
    Read(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("entry {0} has an empty title")]
    EmptyTitle(usize),
}

/// The winning command list and where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedCommands {
    /// Entries in file order. May be empty; an empty config is valid.
    pub entries: Vec<CommandEntry>,
    /// The candidate path that loaded.
    pub source: String,
}

/// Walks an ordered chain of candidate config paths.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    workdir: String,
    candidates: Vec<String>,
}

impl ConfigResolver {
    /// Builds the default six-candidate chain around the probed working
    /// directory.
    pub fn from_environment() -> Self {
        Self::with_workdir(probe_workdir())
    }

    /// Builds the default chain around an explicit working directory.
    pub fn with_workdir(workdir: impl Into<String>) -> Self {
        let workdir = workdir.into();
        let candidates = vec![
            format!("./{}/{}", RESOURCES_DIR, CONFIG_FILENAME),
            format!("{}/{}", RESOURCES_DIR, CONFIG_FILENAME),
            CONFIG_FILENAME.to_string(),
            format!("./{}", CONFIG_FILENAME),
            format!("{}/{}/{}", workdir, RESOURCES_DIR, CONFIG_FILENAME),
            format!("{}/{}", workdir, CONFIG_FILENAME),
        ];
        Self { workdir, candidates }
    }

    /// Builds a single-candidate chain for an explicitly given config path,
    /// bypassing the default locations entirely.
    pub fn with_override(path: impl Into<String>) -> Self {
        Self {
            workdir: probe_workdir(),
            candidates: vec![path.into()],
        }
    }

    pub fn workdir(&self) -> &str {
        &self.workdir
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Tries the chain in order and returns the first candidate that loads.
    ///
    /// Every attempt is announced through the reporter. Once a candidate
    /// wins, the rest of the chain is never touched.
    pub fn resolve(&self, reporter: &mut dyn Reporter) -> Result<ResolvedCommands, ResolveError> {
        if self.workdir == UNKNOWN_WORKDIR {
            reporter.report(Severity::Loading, "Could not determine current directory");
        } else {
            reporter.report(
                Severity::Loading,
                &format!("Current working directory: {}", self.workdir),
            );
        }

        let result = fallback::first_success(&self.candidates, |path| {
            reporter.report(Severity::Loading, &format!("Trying: {}", path));
            load_candidate(path)
                .map(|entries| ResolvedCommands {
                    entries,
                    source: path.clone(),
                })
                .inspect_err(|e| log::debug!("Failed to load '{}': {}", path, e))
        });

        match result {
            Ok(resolved) => {
                reporter.report(
                    Severity::Success,
                    &format!("✓ Configuration loaded from: {}", resolved.source),
                );
                reporter.report(
                    Severity::Success,
                    &format!("Found {} commands in config", resolved.entries.len()),
                );
                Ok(resolved)
            }
            Err(last_error) => Err(ResolveError::NotFound {
                workdir: self.workdir.clone(),
                attempted: self.candidates.clone(),
                last_error: last_error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "no candidate paths configured".to_string()),
            }),
        }
    }
}

/// Reads and validates one candidate. The whole file is rejected if any
/// entry carries an empty title; a partially usable config is not a thing.
fn load_candidate(path: &str) -> Result<Vec<CommandEntry>, CandidateError> {
    let data = fs::read_to_string(path)?;
    let entries: Vec<CommandEntry> = serde_json::from_str(&data)?;
    for (index, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(CandidateError::EmptyTitle(index));
        }
    }
    Ok(entries)
}

/// Asks the OS for the working directory by spawning `pwd`. Any failure
/// collapses to the `"unknown"` placeholder; the resolver still attempts
/// the placeholder-qualified paths literally.
fn probe_workdir() -> String {
    match Command::new("pwd").output() {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let trimmed = stdout.trim();
            if output.status.success() && !trimmed.is_empty() {
                trimmed.to_string()
            } else {
                log::debug!("pwd probe produced no usable output");
                UNKNOWN_WORKDIR.to_string()
            }
        }
        Err(e) => {
            log::debug!("pwd probe failed to spawn: {}", e);
            UNKNOWN_WORKDIR.to_string()
        }
    }
}

// MARK: --- UNIT TESTS ---
