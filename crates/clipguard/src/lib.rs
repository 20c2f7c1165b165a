//! `clipguard` - clipboard privacy engine
//!
//! Masks sensitive data (emails, IP addresses, phone numbers, credit cards,
//! SSNs, custom patterns) in text and cleans tracking parameters and
//! redirector wrapping from URLs. Both engines are pure functions over an
//! ordered rule set; clipboard access and persistence live outside this
//! crate, behind the [`source::TextSource`] boundary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod links;
pub mod logging;
pub mod masking;
pub mod rules;
pub mod source;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use links::clean;
pub use logging::init_logging;
pub use masking::mask;
pub use rules::{builtin_rules, MatchResult, Rule, RuleSet};
pub use source::{Action, MemorySource, TextSource};
pub use store::RuleStore;
