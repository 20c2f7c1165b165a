//! Error types for clipguard.
//!
//! The core engines never fail: malformed rules are skipped and malformed
//! URLs degrade to "return input unchanged". Errors here belong to the
//! boundaries around the core: configuration loading, rule edits, and text
//! sources.

use thiserror::Error;

/// The main error type for clipguard operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Rule Errors ===
    /// A rule with this name already exists; names must be unique across
    /// built-in and custom rules.
    #[error("a rule named '{name}' already exists")]
    RuleExists {
        /// The conflicting rule name.
        name: String,
    },

    /// No rule with this name exists.
    #[error("no rule named '{name}'")]
    RuleNotFound {
        /// The missing rule name.
        name: String,
    },

    /// Built-in rules cannot be removed, only disabled.
    #[error("built-in rule '{name}' cannot be removed, only disabled")]
    BuiltinRule {
        /// The built-in rule name.
        name: String,
    },

    /// A rule pattern failed to compile at the edit boundary.
    #[error("invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        /// The rule name.
        name: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    // === Source Errors ===
    /// A text source failed to read or write.
    #[error("text source '{name}' failed: {message}")]
    Source {
        /// Name of the text source.
        name: &'static str,
        /// Description of what went wrong.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for clipguard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a text source failure.
    #[must_use]
    pub fn source_failure(name: &'static str, message: impl Into<String>) -> Self {
        Self::Source {
            name,
            message: message.into(),
        }
    }

    /// Check if this error is a rule name collision.
    #[must_use]
    pub fn is_rule_conflict(&self) -> bool {
        matches!(self, Self::RuleExists { .. })
    }

    /// Check if this error refers to a missing rule.
    #[must_use]
    pub fn is_rule_not_found(&self) -> bool {
        matches!(self, Self::RuleNotFound { .. })
    }
}
