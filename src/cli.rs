use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Write log records to this file instead of stderr
    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,

    /// Log at debug level
    #[clap(long, value_parser, default_value_t = false)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree for lines containing a keyword
    Search {
        /// Keyword to look for (case-insensitive)
        keyword: String,

        /// Root folder to scan
        #[clap(value_parser, default_value = ".")]
        path: PathBuf,

        /// Comma-separated extension list, e.g. ".py, .txt, .pdf"
        #[clap(long, value_parser)]
        extensions: Option<String>,

        /// Write the report lines to this file when the scan completes
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,

        /// Stdout rendering of the match list
        #[clap(long, value_parser, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Do not draw the progress bar
        #[clap(long, value_parser, default_value_t = false)]
        no_progress: bool,
    },
    /// Generate shell completions
    Completions {
        #[clap(value_parser)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
