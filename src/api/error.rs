use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{ConfigError, ValidationError};
use crate::redirect::ParseError;

/// Failures that keep the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read redirect file '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse redirect file '{}': {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("invalid entry in redirect file: {0}")]
    InvalidEntry(#[from] ValidationError),
    #[error("server error: {0}")]
    Io(#[from] io::Error),
}
