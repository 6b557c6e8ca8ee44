use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::extract::DocumentKind;
use crate::filter::ExtensionSet;

/// A file selected for scanning, with its detected document kind.
#[derive(Debug, Clone)]
pub struct FileTask {
    pub path: PathBuf,
    pub kind: DocumentKind,
}

/// Recursively collects every regular file under `root` whose name
/// matches `extensions`. Entries are visited in lexicographic order
/// per directory so that repeated runs over the same tree produce the
/// same list. Unreadable directories are logged and skipped, never
/// fatal. Symlinks are not followed.
pub fn enumerate_files(root: &Path, extensions: &ExtensionSet) -> Vec<FileTask> {
    if extensions.is_empty() {
        return Vec::new();
    }
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| extensions.matches(entry.path()))
        .map(|entry| FileTask {
            kind: DocumentKind::from_path(entry.path()),
            path: entry.into_path(),
        })
        .collect()
}
