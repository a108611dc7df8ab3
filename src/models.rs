//! Core domain types for the migration run

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Severity attached to a confirmation dialog, controls its visual treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which the substitution rules are attempted.
///
/// `Legacy` reproduces the original migration script: the generic
/// single-quoted-literal rule runs first and claims every plain literal call
/// before the specific literal rules get a chance. `SpecificFirst` is the
/// corrected layering where specific literals win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleOrder {
    #[default]
    Legacy,
    SpecificFirst,
}

impl RuleOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleOrder::Legacy => "legacy",
            RuleOrder::SpecificFirst => "specific-first",
        }
    }
}

impl fmt::Display for RuleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(RuleOrder::Legacy),
            "specific-first" => Ok(RuleOrder::SpecificFirst),
            other => Err(format!(
                "unknown rule order '{other}' (expected 'legacy' or 'specific-first')"
            )),
        }
    }
}

/// Outcome of processing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Content changed and was (or, in dry-run, would be) written back
    Updated,
    /// Pipeline produced identical content; file untouched
    Unchanged,
    /// Read or write failed; file skipped
    Failed(String),
}

impl FileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Updated => "updated",
            FileStatus::Unchanged => "unchanged",
            FileStatus::Failed(_) => "failed",
        }
    }
}

/// Per-file processing report
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Content hash before patching, when the file was readable
    pub before_hash: Option<String>,
    /// Content hash after patching, when the content changed
    pub after_hash: Option<String>,
}

impl FileReport {
    pub fn failed(path: PathBuf, message: String) -> Self {
        Self {
            path,
            status: FileStatus::Failed(message),
            before_hash: None,
            after_hash: None,
        }
    }
}

/// Aggregate counts for a migration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &FileReport) {
        match report.status {
            FileStatus::Updated => self.updated += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Failed(_) => self.failed += 1,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    pub fn has_changes(&self) -> bool {
        self.updated > 0
    }
}

/// Compute the `sha256:<hex>` content hash used for change detection
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
