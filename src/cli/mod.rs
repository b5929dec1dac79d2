// src/cli/mod.rs

use clap::{Parser, Subcommand};

pub mod console;
pub mod handlers;

/// cmdpost: a configuration-driven command launcher.
///
/// Declares commands in a JSON file, lists them as invokable actions, and
/// runs each either in a new terminal window or captured in the background.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Load the command list from this file instead of the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the configured commands
    #[command(alias = "ls")]
    List,

    /// Run a configured command by title or 1-based index
    Run {
        /// Title (exact first, then case-insensitive) or 1-based index
        #[arg(value_name = "COMMAND")]
        reference: String,

        /// Capture in the background even if the entry is interactive
        #[arg(long, conflicts_with = "terminal")]
        background: bool,

        /// Open a terminal window even if the entry is background
        #[arg(long)]
        terminal: bool,
    },

    /// Run a raw command line without consulting the configuration
    Exec {
        /// The command line to run (quote it as one argument)
        #[arg(value_name = "COMMAND")]
        command: String,

        /// Capture in the background instead of opening a terminal window
        #[arg(long)]
        background: bool,
    },

    /// Write a starter configuration file
    Init {
        /// Destination path (defaults to resources/config.json)
        #[arg(long, value_name = "PATH")]
        path: Option<String>,

        /// Overwrite the destination if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Diagnose platform detection, terminal probing, and config discovery
    Doctor,
}
