//! Collaborator trait definitions for dependency injection
//!
//! Everything the core touches outside its own state goes through these
//! traits: the data source, the render target, the navigation bar and the
//! rotation timer.

use std::time::Duration;
use async_trait::async_trait;
use url::Url;

use crate::error::DirectoryResult;
use crate::types::{DirectoryListView, ProfileSection, Status, StatusChannel};

/// Source of the raw directory payload (HTTP endpoint or static JSON file)
#[mockall::automock]
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the raw response body
    async fn fetch(&self) -> DirectoryResult<String>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// DOM-like surface exposing named slots
pub trait RenderTarget: Send {
    /// Fill one profile section slot
    fn render_section(&mut self, section: &ProfileSection);

    /// Replace the staff directory list
    fn render_directory(&mut self, view: &DirectoryListView);

    /// Show a status message, or clear the indicator with `None`
    fn set_status(&mut self, channel: StatusChannel, status: Option<&Status>);

    fn set_profile_visible(&mut self, visible: bool);

    /// Show the not-found indicator with a message, or hide it with `None`
    fn set_not_found(&mut self, message: Option<&str>);
}

/// Current location access with non-navigating replacement
#[mockall::automock]
pub trait Navigator: Send {
    fn current_location(&self) -> Url;

    /// Replace the current location without navigating
    fn replace_location(&mut self, url: Url);
}

/// Arms recurring rotation ticks
#[mockall::automock]
pub trait TimerSource: Send {
    /// Start a timer firing every `period`, tagging each tick with `generation`
    fn arm(&self, period: Duration, generation: u64) -> Box<dyn RotationHandle>;
}

/// Cancellable handle for one armed timer
pub trait RotationHandle: Send {
    /// Stop the timer; calling it more than once is harmless
    fn cancel(&mut self);
}
