//! Shared error types for the staff directory workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            SharedError::DeserializationError { message: err.to_string() }
        } else {
            SharedError::SerializationError { message: err.to_string() }
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
