//! Staff directory kiosk library
//!
//! Loads the employee directory from an HTTP endpoint or a JSON file,
//! resolves which profile to show from the navigation context, renders it
//! into a slot-based render target and rotates through the directory on a
//! timer.

pub mod error;
pub mod types;
pub mod traits;
pub mod config;
pub mod core;
pub mod session_impl;
pub mod services;

// Re-export main types
pub use error::{DirectoryError, DirectoryResult};
pub use types::*;
pub use traits::*;
pub use config::{DirectoryConfig, SourceLocation};
pub use session_impl::DirectorySession;
pub use services::*;
