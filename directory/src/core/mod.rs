//! Directory core logic: pure state and transformations, no I/O

pub mod normalizer;
pub mod slug;
pub mod store;
pub mod scheduler;
pub mod renderer;
pub mod loader;

pub use normalizer::{canonical_slug, extract_staff, normalize_employees, normalize_records, parse_payload};
pub use slug::{resolve_slug, url_with_slug, EMPLOYEE_PARAM, FALLBACK_SLUG};
pub use store::DirectoryStore;
pub use scheduler::RotationScheduler;
pub use renderer::{filter_projects, render_profile};
pub use loader::{fetch_directory, not_found_message, MAX_LOAD_ATTEMPTS};
