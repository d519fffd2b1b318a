//! Tests for the kiosk collaborator implementations

pub mod tokio_timer;
pub mod console_target;
