use std::fmt;
use std::path::PathBuf;

use log::warn;

use crate::error::{KwscanError, Result};
use crate::extract::{extract_lines, Location};
use crate::filter::ExtensionSet;
use crate::matcher;
use crate::walker::{enumerate_files, FileTask};

/// Inputs for one search invocation.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub root: PathBuf,
    pub keyword: String,
    /// Raw comma-separated extension list, parsed by [`ExtensionSet`].
    pub extensions: String,
}

/// One reported keyword occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub path: PathBuf,
    pub location: Location,
    pub line: String,
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Location::Line(line) => {
                write!(f, "{}:{}: {}", self.path.display(), line, self.line.trim())
            }
            Location::Page { page, .. } => {
                write!(f, "{} [Page {}]: {}", self.path.display(), page, self.line.trim())
            }
        }
    }
}

/// Progress after each processed file. `completed` rises by one per
/// file, skipped or not, up to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub completed: usize,
    pub total: usize,
}

/// Terminal classification of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NoFilesFound,
    NoMatchesFound,
    Matches(Vec<MatchRecord>),
}

impl SearchOutcome {
    /// The match list, empty for the no-files and no-matches outcomes.
    pub fn records(&self) -> &[MatchRecord] {
        match self {
            SearchOutcome::Matches(records) => records,
            _ => &[],
        }
    }
}

/// Runs one search to completion: validate inputs, enumerate eligible
/// files, scan each in order, and classify the result. `on_progress`
/// is called once per processed file.
///
/// Per-file extraction failures are logged and skipped; only invalid
/// inputs abort before any file I/O begins.
pub fn run_search<F>(request: &SearchRequest, mut on_progress: F) -> Result<SearchOutcome>
where
    F: FnMut(ProgressEvent),
{
    if request.root.as_os_str().is_empty() {
        return Err(KwscanError::Validation(
            "search folder must not be empty".to_string(),
        ));
    }
    let keyword = request.keyword.trim();
    if keyword.is_empty() {
        return Err(KwscanError::Validation(
            "keyword must not be empty".to_string(),
        ));
    }

    let extensions = ExtensionSet::parse(&request.extensions);
    let files = enumerate_files(&request.root, &extensions);
    let total = files.len();
    if total == 0 {
        return Ok(SearchOutcome::NoFilesFound);
    }

    let mut matches = Vec::new();
    for (index, task) in files.iter().enumerate() {
        scan_file(task, keyword, &mut matches);
        on_progress(ProgressEvent {
            completed: index + 1,
            total,
        });
    }

    if matches.is_empty() {
        Ok(SearchOutcome::NoMatchesFound)
    } else {
        Ok(SearchOutcome::Matches(matches))
    }
}

/// Scans one file, appending every matching line. An extraction
/// failure skips the rest of the file; records matched before the
/// failure stay in the list.
fn scan_file(task: &FileTask, keyword: &str, matches: &mut Vec<MatchRecord>) {
    let stream = match extract_lines(&task.path, task.kind) {
        Ok(stream) => stream,
        Err(err) => {
            warn!("Skipping {}: {err}", task.path.display());
            return;
        }
    };
    for item in stream {
        match item {
            Ok((location, line)) => {
                if matcher::matches(&line, keyword) {
                    matches.push(MatchRecord {
                        path: task.path.clone(),
                        location,
                        line,
                    });
                }
            }
            Err(err) => {
                warn!("Skipping rest of {}: {err}", task.path.display());
                break;
            }
        }
    }
}
