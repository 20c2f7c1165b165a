//! `clipguard` - CLI for the clipboard privacy engine.
//!
//! One-shot transformations over text supplied as an argument or on stdin,
//! plus inspection of the active rule set and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use regex::Regex;

use clipguard::cli::{Cli, CleanCommand, Command, ConfigCommand, MaskCommand, RulesCommand};
use clipguard::{clean, init_logging, mask, Config, RuleStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Mask(cmd) => handle_mask(&config, cmd),
        Command::Clean(cmd) => handle_clean(cmd),
        Command::Rules(cmd) => handle_rules(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Use the argument when given, otherwise read all of stdin.
fn read_input(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn handle_mask(config: &Config, cmd: MaskCommand) -> anyhow::Result<()> {
    let text = read_input(cmd.text)?;
    let store = RuleStore::from_config(&config.rules)?;
    let result = mask(&text, store.ruleset());
    println!("{}", result.text);
    Ok(())
}

fn handle_clean(cmd: CleanCommand) -> anyhow::Result<()> {
    let url = read_input(cmd.url)?;
    let result = clean(&url);
    println!("{}", result.text);
    Ok(())
}

fn handle_rules(config: &Config, cmd: &RulesCommand) -> anyhow::Result<()> {
    let store = RuleStore::from_config(&config.rules)?;

    match cmd {
        RulesCommand::List { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(store.ruleset())?);
            } else {
                println!("{:<20} {:<8} {:<8} PATTERN", "NAME", "ENABLED", "ORIGIN");
                for (name, rule) in store.ruleset() {
                    println!(
                        "{:<20} {:<8} {:<8} {}",
                        name,
                        rule.enabled,
                        if rule.builtin { "builtin" } else { "custom" },
                        rule.pattern
                    );
                }
            }
        }
        RulesCommand::Check { text } => {
            let mut any = false;
            for (name, rule) in store.ruleset() {
                if !rule.enabled {
                    continue;
                }
                let Ok(regex) = Regex::new(&rule.pattern) else {
                    println!("{name}: invalid pattern, skipped");
                    continue;
                };
                let count = regex.find_iter(text).count();
                if count > 0 {
                    println!("{name}: {count} match(es)");
                    any = true;
                }
            }
            if !any {
                println!("No enabled rule matches.");
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("Active:              {}", config.active);
                println!();
                println!("[Rules]");
                println!("  Disabled builtins: {}", config.rules.disabled.len());
                println!("  Custom rules:      {}", config.rules.custom.len());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
