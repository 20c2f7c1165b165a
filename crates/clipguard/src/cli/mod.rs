//! Command-line interface for clipguard.
//!
//! This module provides the CLI structure for the `clipguard` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{CleanCommand, ConfigCommand, MaskCommand, RulesCommand};

/// clipguard - Mask sensitive data and clean tracking from links
///
/// Detects emails, credit cards, SSNs and other sensitive tokens in text
/// and replaces them with placeholders; strips tracking parameters and
/// redirector wrapping from URLs. Everything runs locally.
#[derive(Debug, Parser)]
#[command(name = "clipguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mask sensitive data in text
    Mask(MaskCommand),

    /// Clean tracking parameters and redirectors from a URL
    Clean(CleanCommand),

    /// Inspect the active rule set
    #[command(subcommand)]
    Rules(RulesCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
