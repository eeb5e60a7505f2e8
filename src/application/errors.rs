//! Application layer errors

use thiserror::Error;

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    NotFound(String),

    /// Wrong number of arguments; carries the usage line
    #[error("Usage: {0}")]
    Usage(String),

    /// The handler refuses to continue; the process should stop with a non-zero exit
    #[error("{0}")]
    Fatal(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CommandError {
    /// Usage mistakes and explicit fatal outcomes halt the command outright
    pub fn is_fatal(&self) -> bool {
        matches!(self, CommandError::Usage(_) | CommandError::Fatal(_))
    }
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Feed retrieval errors
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] rss::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
