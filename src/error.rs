use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KwscanError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Cannot read '{path}': {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is not valid UTF-8 text")]
    Decode { path: PathBuf },

    #[error("Cannot parse '{path}': {message}")]
    Format { path: PathBuf, message: String },

    #[error("Cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("An unexpected error occurred: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, KwscanError>;
