//! Text source boundary.
//!
//! The clipboard itself lives outside this crate. The engines only need a
//! source that yields text snapshots and accepts replacement text; this
//! module defines that boundary plus the one-pass orchestration over it.

use tracing::{debug, info};

use crate::error::Result;
use crate::links;
use crate::masking;
use crate::rules::RuleSet;

/// A source of text snapshots that can accept replacement text.
///
/// Implementations must not require internal locking: one pass runs to
/// completion on a single thread, and the rule set it receives is an
/// immutable snapshot for the duration of the call.
pub trait TextSource {
    /// Name of this source (for logging).
    fn name(&self) -> &'static str;

    /// The current text, or `None` when the source has nothing to offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn snapshot(&mut self) -> Result<Option<String>>;

    /// Push transformed text back into the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be written.
    fn replace(&mut self, text: &str) -> Result<()>;
}

/// The transformation to run on a snapshot.
///
/// Masking and link cleaning are mutually exclusive per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mask sensitive data using the rule set.
    Mask,
    /// Normalize a URL.
    CleanLink,
}

/// Run one transformation pass over the source.
///
/// Takes a snapshot, applies the selected action, and pushes the result
/// back only when it changed. Returns whether a replacement happened.
///
/// # Errors
///
/// Returns an error if the source fails to read or write; the
/// transformation itself never fails.
pub fn apply(source: &mut dyn TextSource, rules: &RuleSet, action: Action) -> Result<bool> {
    let Some(text) = source.snapshot()? else {
        debug!(source = %source.name(), "no snapshot available");
        return Ok(false);
    };

    let result = match action {
        Action::Mask => masking::mask(&text, rules),
        Action::CleanLink => links::clean(&text),
    };

    if result.changed {
        info!(source = %source.name(), ?action, "replacing transformed text");
        source.replace(&result.text)?;
    }
    Ok(result.changed)
}

/// In-memory text source for tests and in-process callers.
#[derive(Debug, Default)]
pub struct MemorySource {
    content: Option<String>,
}

impl MemorySource {
    /// Create a source holding `text`.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
        }
    }

    /// The text currently held, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl TextSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn snapshot(&mut self) -> Result<Option<String>> {
        Ok(self.content.clone())
    }

    fn replace(&mut self, text: &str) -> Result<()> {
        self.content = Some(text.to_string());
        Ok(())
    }
}
