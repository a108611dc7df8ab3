//! NDJSON event sink
//!
//! One JSON object per line on stdout for CI/automation consumption.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::models::{FileReport, FileStatus, RuleOrder, RunSummary};

pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }

    pub fn emit_start(&self, root: &Path, order: RuleOrder, file_count: usize, dry_run: bool) {
        self.write_event(serde_json::json!({
            "event": "start",
            "command": "run",
            "root": root.display().to_string(),
            "rule_order": order.as_str(),
            "file_count": file_count,
            "dry_run": dry_run,
        }));
    }

    pub fn emit_file(&self, report: &FileReport) {
        let error = match &report.status {
            FileStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        };
        self.write_event(serde_json::json!({
            "event": "file",
            "path": report.path.display().to_string(),
            "status": report.status.label(),
            "error": error,
            "before_hash": report.before_hash.as_deref(),
            "after_hash": report.after_hash.as_deref(),
        }));
    }

    pub fn emit_summary(&self, summary: &RunSummary) {
        self.write_event(serde_json::json!({
            "event": "summary",
            "discovered": summary.discovered,
            "updated": summary.updated,
            "unchanged": summary.unchanged,
            "failed": summary.failed,
        }));
    }
}
