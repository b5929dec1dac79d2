// src/report.rs

//! The reporting boundary between the execution core and its UI.
//!
//! The core never prints. Every user-facing event (a config path being
//! tried, a command launching, a launch failing) goes through a [`Reporter`]
//! with a severity class, and the sink decides how to render it. The CLI
//! installs a console sink; tests install recording sinks.

use std::fmt;

/// Severity class attached to every report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress of an operation still underway.
    Loading,
    /// An operation concluded as intended.
    Success,
    /// Something went wrong, or output that deserves attention.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// An append-only sink for status text. Timestamps are the sink's concern.
pub trait Reporter {
    fn report(&mut self, severity: Severity, text: &str);
}

/// A reporter that discards everything. For callers that want the core's
/// results without its narration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _severity: Severity, _text: &str) {}
}
