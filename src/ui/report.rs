//! Human-readable run reporting
//!
//! Pure string renderers; callers decide where the lines go. Color and
//! unicode support are passed in so tests can pin the plain rendering.

use std::path::Path;

use crossterm::style::Stylize;

use crate::models::{FileReport, FileStatus, RuleOrder, RunSummary};
use crate::ui::theme;

pub fn render_header(
    root: &Path,
    order: RuleOrder,
    modes: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = if supports_unicode {
        theme::icons::HEADER
    } else {
        theme::icons_ascii::HEADER
    };

    let title = format!("{icon} Confirmify Migration");
    let title = if supports_color {
        format!("{}", title.as_str().with(theme::colors::INFO))
    } else {
        title
    };

    let mut out = title;
    out.push_str(&format!("\nRoot: {}", root.display()));
    out.push_str(&format!("\nRule order: {order}"));
    for mode in modes {
        out.push_str(&format!("\nMode: {mode}"));
    }
    out
}

pub fn render_file_count(count: usize) -> String {
    format!("Found {count} form files")
}

pub fn render_file_line(
    report: &FileReport,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, ascii, color) = match report.status {
        FileStatus::Updated => (
            theme::icons::UPDATED,
            theme::icons_ascii::UPDATED,
            theme::colors::SUCCESS,
        ),
        FileStatus::Unchanged => (
            theme::icons::UNCHANGED,
            theme::icons_ascii::UNCHANGED,
            theme::colors::DIM,
        ),
        FileStatus::Failed(_) => (
            theme::icons::FAILED,
            theme::icons_ascii::FAILED,
            theme::colors::ERROR,
        ),
    };

    let icon = if supports_unicode { icon } else { ascii };
    let icon = if supports_color {
        format!("{}", icon.with(color))
    } else {
        icon.to_string()
    };

    let detail = match &report.status {
        FileStatus::Updated if dry_run => "would update (dry-run)".to_string(),
        FileStatus::Updated => "updated".to_string(),
        FileStatus::Unchanged => "no changes needed".to_string(),
        FileStatus::Failed(message) => format!("error: {message}"),
    };

    format!("  {icon} {} {detail}", report.path.display())
}

pub fn render_summary(summary: &RunSummary, dry_run: bool, supports_color: bool) -> String {
    let title = if !summary.is_clean() {
        "Migration finished with errors"
    } else if dry_run {
        "Dry run complete"
    } else {
        "Migration complete"
    };
    let title = if supports_color {
        let color = if summary.is_clean() {
            theme::colors::SUCCESS
        } else {
            theme::colors::WARNING
        };
        format!("{}", title.with(color))
    } else {
        title.to_string()
    };

    let updated_label = if dry_run { "would update" } else { "updated" };
    format!(
        "{title}\n  {} files scanned\n  {} {updated_label}\n  {} unchanged\n  {} failed",
        summary.discovered, summary.updated, summary.unchanged, summary.failed
    )
}
