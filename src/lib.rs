//! Confirmify - alert() to confirm-dialog migration codemod
//!
//! Confirmify scans a React form tree for blocking `alert(...)` calls and
//! rewrites them into awaited `confirm({ title, description, severity })`
//! dialog calls, wiring in the `useConfirmDialog` import and hook declaration
//! wherever they are missing.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod patch;
pub mod rules;
pub mod ui;
pub mod walker;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigWarning};
pub use engine::{EngineOptions, FileChange, FileOutcome, MigrationEngine};
pub use error::{ConfirmifyError, ConfirmifyResult};
pub use models::{FileReport, FileStatus, RuleOrder, RunSummary, Severity};
pub use patch::Patcher;
pub use rules::{Rule, RuleSet};
pub use walker::discover_files;
