//! User interaction handling for Stencil.
//! The only interaction the tool has is the confirmation asked before an
//! existing output file is overwritten.

use crate::error::{Error, Result};
use dialoguer::Confirm;

/// Trait for confirmation prompts, so the processor flow can be driven
/// without a terminal in tests.
pub trait Prompter {
    /// Asks a yes/no question; `false` is the default answer.
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    /// Creates a new DialoguerPrompter instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
