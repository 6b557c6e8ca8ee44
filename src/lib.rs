pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod extract;
pub mod filter;
pub mod matcher;
pub mod output;
pub mod progress;
pub mod walker;

pub use crate::engine::{run_search, MatchRecord, ProgressEvent, SearchOutcome, SearchRequest};
pub use crate::error::{KwscanError, Result};
pub use crate::extract::{extract_lines, DocumentKind, LineStream, Location};
pub use crate::filter::ExtensionSet;
pub use crate::walker::{enumerate_files, FileTask};
