//! Directory error types

use thiserror::Error;
use shared::SharedError;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory error types
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Network failure or non-success status reaching the data source
    #[error("Directory transport failed: {message}")]
    Transport { message: String, status: Option<u16> },

    /// Body is not JSON or does not carry a staff list
    #[error("Directory payload could not be parsed: {message}")]
    Parse { message: String },

    #[error("No valid employees after normalization")]
    EmptyDirectory,

    #[error("Profile not found for \"{slug}\"")]
    NotFound { slug: String },

    #[error("Staff directory unavailable after {attempts} attempts")]
    Unavailable { attempts: u32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DirectoryError {
    pub fn transport(message: impl Into<String>) -> Self {
        DirectoryError::Transport { message: message.into(), status: None }
    }

    pub fn http_status(status: u16) -> Self {
        DirectoryError::Transport {
            message: format!("Directory API error HTTP {status}"),
            status: Some(status),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        DirectoryError::Parse { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        DirectoryError::ConfigError { message: message.into() }
    }

    /// Load-time failures the loader may retry; lookups and config errors are not
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            DirectoryError::Transport { .. } | DirectoryError::Parse { .. } | DirectoryError::EmptyDirectory
        )
    }
}
