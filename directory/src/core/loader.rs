//! One load attempt: fetch, extract, normalize
//!
//! The retry loop and the status transitions around it live on the session;
//! this module only turns a source into a non-empty employee list or an error.

use shared::{Employee, component_debug, ComponentId};

use crate::core::normalizer::{normalize_employees, parse_payload};
use crate::error::{DirectoryError, DirectoryResult};
use crate::traits::DirectorySource;

/// Attempts per load, including the first
pub const MAX_LOAD_ATTEMPTS: u32 = 2;

pub const LOADING_MESSAGE: &str = "Loading staff directory…";
pub const DIRECTORY_RETRY_MESSAGE: &str = "Loading staff directory… retrying.";
pub const PROFILE_RETRY_MESSAGE: &str = "Retrying directory request…";
pub const UNAVAILABLE_MESSAGE: &str = "Staff directory temporarily unavailable.";
pub const PROFILE_NOT_FOUND_MESSAGE: &str = "Profile not found.";
pub const EMPTY_DIRECTORY_MESSAGE: &str = "No staff to display yet.";

/// Not-found indicator text for a slug nobody matched
pub fn not_found_message(slug: &str) -> String {
    format!("Profile not found for \"{slug}\". Please choose another teammate.")
}

/// Fetch and normalize the directory once.
///
/// An empty list after normalization is [`DirectoryError::EmptyDirectory`].
pub async fn fetch_directory<S: DirectorySource + ?Sized>(source: &S) -> DirectoryResult<Vec<Employee>> {
    let body = source.fetch().await?;
    let entries = parse_payload(&body)?;
    let received = entries.len();

    let employees = normalize_employees(entries);
    component_debug!(
        ComponentId::current(),
        "Normalized {} of {} directory entries from {}",
        employees.len(),
        received,
        source.describe()
    );

    if employees.is_empty() {
        return Err(DirectoryError::EmptyDirectory);
    }
    Ok(employees)
}
