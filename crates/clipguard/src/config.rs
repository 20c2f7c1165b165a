//! Configuration management for clipguard.
//!
//! Configuration loading and validation using figment, supporting a TOML
//! config file, environment variables, and defaults. The core engines never
//! read configuration themselves; the CLI loads it once and builds a rule
//! store from it.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rules::builtin_rules;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "clipguard";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CLIPGUARD_`)
/// 2. TOML config file at `~/.config/clipguard/config.toml`
/// 3. Default values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether clipboard transformations are active at all. Only gates the
    /// monitoring loop hosting this crate; one-shot CLI calls ignore it.
    pub active: bool,

    /// Rule configuration.
    pub rules: RulesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active: true,
            rules: RulesConfig::default(),
        }
    }
}

/// Rule-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Names of built-in rules to disable.
    pub disabled: Vec<String>,

    /// Custom rules, appended after the built-ins when the rule store is
    /// built. Order is deterministic: figment merges configuration maps in
    /// sorted key order.
    pub custom: IndexMap<String, CustomRule>,
}

/// A user-defined rule as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRule {
    /// Regular expression to match.
    pub pattern: String,

    /// Literal replacement text.
    pub replacement: String,

    /// Whether the rule is active.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation
    /// fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation
    /// fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("CLIPGUARD_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// Custom rules are checked here, at the edit boundary, so a broken
    /// pattern is surfaced at load time rather than silently skipped at
    /// match time.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom rule collides with a built-in name or
    /// its pattern does not compile.
    pub fn validate(&self) -> Result<()> {
        let builtins = builtin_rules();
        for (name, rule) in &self.rules.custom {
            if builtins.contains_key(name) {
                return Err(Error::validation(format!(
                    "custom rule '{name}' collides with a built-in rule"
                )));
            }
            if let Err(e) = regex::Regex::new(&rule.pattern) {
                return Err(Error::validation(format!(
                    "invalid pattern for custom rule '{name}': {e}"
                )));
            }
        }
        Ok(())
    }
}
