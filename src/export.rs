use std::fs;
use std::path::Path;

use crate::error::{KwscanError, Result};

/// Writes `lines` newline-joined to `destination`, replacing any
/// existing content. No trailing newline is appended.
pub fn export(destination: &Path, lines: &[String]) -> Result<()> {
    fs::write(destination, lines.join("\n")).map_err(|source| KwscanError::Write {
        path: destination.to_path_buf(),
        source,
    })
}
