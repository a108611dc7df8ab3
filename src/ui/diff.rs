//! Unified diff rendering for changed files

use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

pub fn render_unified_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);

    let mut out = String::new();
    out.push_str(&color_line(
        &format!("--- a/{path}"),
        ChangeTag::Equal,
        supports_color,
        true,
    ));
    out.push('\n');
    out.push_str(&color_line(
        &format!("+++ b/{path}"),
        ChangeTag::Equal,
        supports_color,
        true,
    ));
    out.push('\n');

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        let value = change.value().trim_end_matches('\n');
        let line = format!("{sign} {value}");
        out.push_str(&color_line(&line, change.tag(), supports_color, false));
        out.push('\n');
    }

    out
}

fn color_line(s: &str, tag: ChangeTag, supports_color: bool, header: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    if header {
        return format!("{}", s.with(theme::colors::INFO));
    }

    match tag {
        ChangeTag::Delete => format!("{}", s.with(theme::colors::ERROR)),
        ChangeTag::Insert => format!("{}", s.with(theme::colors::SUCCESS)),
        ChangeTag::Equal => format!("{}", s.with(theme::colors::DIM)),
    }
}
