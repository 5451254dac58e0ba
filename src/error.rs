// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("file {filename:?} not found")]
    FileNotFound { filename: String },
    #[error("pattern {pattern:?} is longer than {limit} characters")]
    PatternTooLong { pattern: String, limit: usize },
    #[error("no patterns given, pass them as arguments, with --pattern or in the configuration file")]
    NoPatterns,
}

impl Error {
    /// Returns true if the error is caused by the reader side of the output going away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
