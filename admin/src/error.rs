//! Admin error types

use thiserror::Error;
use directory::DirectoryError;

/// Result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Invalid directory JSON: {message}")]
    InvalidJson { message: String },

    /// Slug and name are required on every edit
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::InvalidJson { message: err.to_string() }
    }
}
