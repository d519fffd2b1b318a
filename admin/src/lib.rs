//! Staff data-entry companion
//!
//! Edits the raw directory payload in memory and serializes it back out as
//! `{"staff": [...]}`. Records are kept as raw JSON so fields this tool does
//! not know about survive an edit.

pub mod error;
pub mod editor;

pub use error::{AdminError, AdminResult};
pub use editor::{StaffEdit, StaffEditor};
