//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Mask command arguments.
#[derive(Debug, Args)]
pub struct MaskCommand {
    /// Text to mask (read from stdin when omitted)
    pub text: Option<String>,
}

/// Clean command arguments.
#[derive(Debug, Args)]
pub struct CleanCommand {
    /// URL to clean (read from stdin when omitted)
    pub url: Option<String>,
}

/// Rule inspection commands.
#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// List the active rule set in evaluation order
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show which enabled rules match the given text
    Check {
        /// The text to test against the rule set
        text: String,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
