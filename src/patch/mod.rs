//! The patch pipeline
//!
//! Four ordered, purely textual steps applied to each file's content:
//! import insertion, hook declaration insertion, call-site substitution,
//! signature adjustment. No I/O here; the engine owns reading and writing.

pub mod calls;
pub mod hooks;
pub mod imports;
pub mod signature;

use regex::Regex;

use crate::error::ConfirmifyResult;
use crate::rules::RuleSet;

pub use imports::{CONFIRM_IMPORT, DIALOG_MARKER};

/// Applies the full pipeline to file content
pub struct Patcher {
    rules: RuleSet,
    handler_re: Regex,
}

impl Patcher {
    pub fn new(rules: RuleSet) -> ConfirmifyResult<Self> {
        Ok(Self {
            handler_re: Regex::new(signature::HANDLER_PATTERN)?,
            rules,
        })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run all four steps in order and return the rewritten content.
    ///
    /// Idempotent on its own output: the marker checks in steps 1 and 2 and
    /// the absence of remaining `alert(` call sites after step 3 make a
    /// second pass a no-op.
    pub fn apply(&self, content: &str) -> String {
        let content = imports::ensure_import(content);
        let content = hooks::ensure_hook(&content);
        let content = calls::rewrite_calls(&content, &self.rules);
        signature::asyncify_handler(&content, &self.handler_re)
    }
}
