//! Migration engine
//!
//! Drives discovered files through the patch pipeline one at a time: read,
//! patch, compare content hashes, write back only when something changed.
//! Every per-file failure is captured in that file's report; nothing aborts
//! the run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ConfirmifyError, ConfirmifyResult};
use crate::models::{hash_content, FileReport, FileStatus, RunSummary};
use crate::patch::Patcher;

/// Engine behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Run the full pipeline but write nothing back
    pub dry_run: bool,
}

/// Before/after content of a changed file, kept for diff rendering
#[derive(Debug, Clone)]
pub struct FileChange {
    pub original: String,
    pub patched: String,
}

/// Report plus optional changed content for one processed file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub report: FileReport,
    pub change: Option<FileChange>,
}

/// Sequential, single-threaded migration driver
pub struct MigrationEngine {
    patcher: Patcher,
    options: EngineOptions,
}

impl MigrationEngine {
    pub fn new(patcher: Patcher, options: EngineOptions) -> Self {
        Self { patcher, options }
    }

    /// Process every file in order, streaming each outcome to `observer`.
    pub fn run(&self, files: &[PathBuf], observer: &mut dyn FnMut(&FileOutcome)) -> RunSummary {
        let mut summary = RunSummary {
            discovered: files.len(),
            ..RunSummary::default()
        };

        for path in files {
            let outcome = self.process_file(path);
            summary.record(&outcome.report);
            observer(&outcome);
        }

        summary
    }

    /// Read, patch and (unless dry-run) write back a single file.
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        let original = match read_utf8(path) {
            Ok(content) => content,
            Err(e) => {
                return FileOutcome {
                    report: FileReport::failed(path.to_path_buf(), e.to_string()),
                    change: None,
                }
            }
        };

        let before_hash = hash_content(&original);
        let patched = self.patcher.apply(&original);
        let after_hash = hash_content(&patched);

        if after_hash == before_hash {
            return FileOutcome {
                report: FileReport {
                    path: path.to_path_buf(),
                    status: FileStatus::Unchanged,
                    before_hash: Some(before_hash),
                    after_hash: None,
                },
                change: None,
            };
        }

        if !self.options.dry_run {
            if let Err(e) = atomic_write(path, &patched) {
                return FileOutcome {
                    report: FileReport {
                        path: path.to_path_buf(),
                        status: FileStatus::Failed(e.to_string()),
                        before_hash: Some(before_hash),
                        after_hash: None,
                    },
                    change: None,
                };
            }
        }

        FileOutcome {
            report: FileReport {
                path: path.to_path_buf(),
                status: FileStatus::Updated,
                before_hash: Some(before_hash),
                after_hash: Some(after_hash),
            },
            change: Some(FileChange { original, patched }),
        }
    }
}

fn read_utf8(path: &Path) -> ConfirmifyResult<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ConfirmifyError::Utf8 {
        file: path.to_path_buf(),
    })
}

/// Write via tempfile + rename so a crash mid-write cannot truncate a source
/// file. The temp file lives in the target's directory to keep the rename on
/// one filesystem.
fn atomic_write(path: &Path, content: &str) -> ConfirmifyResult<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| ConfirmifyError::Write {
        file: path.to_path_buf(),
        message: e.error.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleOrder;
    use crate::rules::RuleSet;
    use tempfile::tempdir;

    fn engine(dry_run: bool) -> MigrationEngine {
        let patcher = Patcher::new(RuleSet::new(RuleOrder::Legacy).unwrap()).unwrap();
        MigrationEngine::new(patcher, EngineOptions { dry_run })
    }

    const NEEDS_MIGRATION: &str = "\
import { useAuth } from '../../../context/AuthContext';

const Form = () => {
  const { user } = useAuth();
  alert('Kayıt silindi.');
};
";

    #[test]
    fn updates_file_needing_migration() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Form.tsx");
        fs::write(&file, NEEDS_MIGRATION).unwrap();

        let outcome = engine(false).process_file(&file);

        assert_eq!(outcome.report.status, FileStatus::Updated);
        assert!(outcome.report.before_hash.is_some());
        assert!(outcome.report.after_hash.is_some());
        let on_disk = fs::read_to_string(&file).unwrap();
        assert!(on_disk.contains("await confirm"));
        assert!(!on_disk.contains("alert("));
    }

    #[test]
    fn unchanged_file_is_not_rewritten() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Badge.tsx");
        let content = "const Badge = () => <span />;\n";
        fs::write(&file, content).unwrap();

        let outcome = engine(false).process_file(&file);

        assert_eq!(outcome.report.status, FileStatus::Unchanged);
        assert!(outcome.change.is_none());
        assert_eq!(fs::read_to_string(&file).unwrap(), content);
    }

    #[test]
    fn dry_run_reports_update_but_writes_nothing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Form.tsx");
        fs::write(&file, NEEDS_MIGRATION).unwrap();

        let outcome = engine(true).process_file(&file);

        assert_eq!(outcome.report.status, FileStatus::Updated);
        assert_eq!(fs::read_to_string(&file).unwrap(), NEEDS_MIGRATION);
    }

    #[test]
    fn second_run_is_a_no_op() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Form.tsx");
        fs::write(&file, NEEDS_MIGRATION).unwrap();

        let eng = engine(false);
        assert_eq!(eng.process_file(&file).report.status, FileStatus::Updated);
        assert_eq!(eng.process_file(&file).report.status, FileStatus::Unchanged);
    }

    #[test]
    fn invalid_utf8_is_reported_not_fatal() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("Broken.tsx");
        let good = dir.path().join("Form.tsx");
        fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();
        fs::write(&good, NEEDS_MIGRATION).unwrap();

        let mut statuses = Vec::new();
        let summary = engine(false).run(&[bad.clone(), good.clone()], &mut |outcome| {
            statuses.push(outcome.report.status.label());
        });

        assert_eq!(summary.discovered, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(statuses, vec!["failed", "updated"]);
    }

    #[test]
    fn missing_file_is_reported_not_fatal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("Gone.tsx");

        let outcome = engine(false).process_file(&missing);

        match outcome.report.status {
            FileStatus::Failed(ref message) => assert!(message.contains("IO error")),
            ref other => panic!("expected failure, got {other:?}"),
        }
    }
}
