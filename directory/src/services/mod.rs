//! Collaborator implementations used by the kiosk binary

pub mod http_source;
pub mod file_source;
pub mod tokio_timer;
pub mod console_target;
pub mod memory_navigator;

#[cfg(test)]
pub mod tests;

pub use http_source::*;
pub use file_source::*;
pub use tokio_timer::*;
pub use console_target::*;
pub use memory_navigator::*;
