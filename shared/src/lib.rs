//! Shared types for the staff directory workspace
//!
//! Contains only the types both the kiosk and the admin tool agree on:
//! the employee record shape, component identity and logging helpers.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
