//! Import insertion step
//!
//! Wires `useConfirmDialog` into a file that does not import it yet. The
//! insertion point is anchored on existing imports: directly above the auth
//! hook import when present, otherwise directly below the React import line.
//! A file with neither anchor is left alone.

/// Import line inserted for the confirmation dialog hook
pub const CONFIRM_IMPORT: &str =
    "import { useConfirmDialog } from '../../../hooks/useConfirmDialog';";

/// Marker symbol: any occurrence means the file already has the capability
pub const DIALOG_MARKER: &str = "useConfirmDialog";

const AUTH_IMPORT_ANCHOR: &str = "import { useAuth }";
const REACT_IMPORT_PREFIX: &str = "import React";

pub fn ensure_import(content: &str) -> String {
    if content.contains(DIALOG_MARKER) {
        return content.to_string();
    }

    if content.contains(AUTH_IMPORT_ANCHOR) {
        // String-replace semantics: every occurrence of the anchor gains the
        // import, matching the original migration script.
        return content.replace(
            AUTH_IMPORT_ANCHOR,
            &format!("{CONFIRM_IMPORT}\n{AUTH_IMPORT_ANCHOR}"),
        );
    }

    let mut lines: Vec<&str> = content.split('\n').collect();
    if let Some(i) = lines
        .iter()
        .position(|line| line.starts_with(REACT_IMPORT_PREFIX))
    {
        lines.insert(i + 1, CONFIRM_IMPORT);
        return lines.join("\n");
    }

    content.to_string()
}
