//! File discovery
//!
//! Walks the migration root and returns every file with the target extension,
//! sorted lexicographically so console output and tests are reproducible.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Recursively collect files under `root` whose extension equals `extension`.
///
/// A missing or non-directory root is not an error: there is simply nothing
/// to migrate, and the caller reports "0 files found". Standard filters are
/// disabled because a codemod has to reach hidden and gitignored files too.
pub fn discover_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkBuilder::new(root)
        .standard_filters(false)
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();

    files.sort();
    files
}
