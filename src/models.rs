// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// --- COMMAND CONFIGURATION MODELS ---
// These are what the user writes in `config.json`.

/// A single launchable command as declared in the configuration file.
///
/// Unknown extra fields in the JSON are ignored, so a config can carry
/// annotations (comments, grouping hints) without breaking the load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Display name for the action. Must be non-empty.
    pub title: String,
    /// The shell command to execute, passed to the platform shell verbatim.
    pub command: String,
    /// `true` opens a new terminal window, `false` runs captured in the
    /// background. Absent in the JSON means interactive.
    #[serde(default = "default_interactive")]
    pub interactive: bool,
}

fn default_interactive() -> bool {
    true
}

// --- PLATFORM MODELS ---

/// The host operating-system family, as probed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Linux,
    MacOS,
    Windows,
    /// The probes ran but matched nothing, or every probe failed.
    Unknown,
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linux => "linux",
            Self::MacOS => "macos",
            Self::Windows => "windows",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

// --- EXECUTION MODELS ---

/// How a command is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Detached, in a freshly spawned terminal window. Output is not captured.
    Interactive,
    /// Synchronous, windowless, with stdout/stderr captured.
    Background,
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interactive => "Interactive (new terminal)",
            Self::Background => "Background",
        };
        write!(f, "{}", name)
    }
}

/// Whether an invocation launched. Only launch-level errors count as failure;
/// a background command that ran and exited non-zero is still `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    Success,
    Failure,
}

/// The result of one invocation. Built per call and handed to the caller,
/// never stored.
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    pub mode: ExecMode,
    pub status: ExecStatus,
    /// Captured standard output. Always empty in interactive mode.
    pub stdout: String,
    /// Captured standard error. Non-empty stderr does not affect `status`.
    pub stderr: String,
    /// Exit code of a background command, when the child reported one.
    /// Informational only.
    pub exit_code: Option<i32>,
    /// The launch error message, present exactly when `status` is `Failure`.
    pub error: Option<String>,
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        self.status == ExecStatus::Success
    }
}

// MARK: --- UNIT TESTS ---
