//! Test helper utilities for directory integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

use directory::{
    DirectoryConfig, DirectoryError, DirectoryListView, DirectorySession, MemoryNavigator, MockDirectorySource,
    ProfileSection, RenderTarget, RotationHandle, Status, StatusChannel, TimerSource,
};

pub type TestSession = DirectorySession<MockDirectorySource, RecordingTarget, MemoryNavigator, ManualTimerSource>;

pub const TEST_LOCATION: &str = "https://people.example.com/index.html?tab=about";

/// Render target that remembers everything it was told
#[derive(Default)]
pub struct RecordingTarget {
    pub sections: Vec<ProfileSection>,
    pub directory: DirectoryListView,
    pub statuses: HashMap<StatusChannel, Option<Status>>,
    /// Every status update in order, clears included
    pub status_log: Vec<(StatusChannel, Option<Status>)>,
    pub profile_visible: bool,
    pub not_found: Option<String>,
}

impl RecordingTarget {
    pub fn status(&self, channel: StatusChannel) -> Option<&Status> {
        self.statuses.get(&channel).and_then(Option::as_ref)
    }

    /// Name from the most recent sidebar render
    pub fn rendered_name(&self) -> Option<String> {
        self.sections.iter().rev().find_map(|section| match section {
            ProfileSection::Sidebar(view) => Some(view.name.clone()),
            _ => None,
        })
    }

    pub fn status_messages(&self, channel: StatusChannel) -> Vec<String> {
        self.status_log
            .iter()
            .filter(|(c, _)| *c == channel)
            .filter_map(|(_, status)| status.as_ref().map(|s| s.message.clone()))
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn render_section(&mut self, section: &ProfileSection) {
        self.sections.push(section.clone());
    }

    fn render_directory(&mut self, view: &DirectoryListView) {
        self.directory = view.clone();
    }

    fn set_status(&mut self, channel: StatusChannel, status: Option<&Status>) {
        self.statuses.insert(channel, status.cloned());
        self.status_log.push((channel, status.cloned()));
    }

    fn set_profile_visible(&mut self, visible: bool) {
        self.profile_visible = visible;
    }

    fn set_not_found(&mut self, message: Option<&str>) {
        self.not_found = message.map(str::to_string);
    }
}

/// Timer bookkeeping shared between a test and its session
#[derive(Debug, Default)]
pub struct TimerLog {
    pub armed: Vec<(Duration, u64)>,
    pub live: usize,
}

/// Timer source that never fires on its own; tests post ticks by hand
#[derive(Clone, Default)]
pub struct ManualTimerSource {
    pub log: Arc<Mutex<TimerLog>>,
}

impl ManualTimerSource {
    pub fn live(&self) -> usize {
        self.log.lock().unwrap().live
    }

    pub fn armed_count(&self) -> usize {
        self.log.lock().unwrap().armed.len()
    }
}

impl TimerSource for ManualTimerSource {
    fn arm(&self, period: Duration, generation: u64) -> Box<dyn RotationHandle> {
        let mut log = self.log.lock().unwrap();
        log.armed.push((period, generation));
        log.live += 1;
        Box::new(ManualHandle { log: self.log.clone(), cancelled: false })
    }
}

struct ManualHandle {
    log: Arc<Mutex<TimerLog>>,
    cancelled: bool,
}

impl RotationHandle for ManualHandle {
    fn cancel(&mut self) {
        if !self.cancelled {
            self.cancelled = true;
            self.log.lock().unwrap().live -= 1;
        }
    }
}

/// Source that answers every fetch with `body`
pub fn source_with_body(body: String) -> MockDirectorySource {
    let mut source = MockDirectorySource::new();
    source.expect_fetch().returning(move || Ok(body.clone()));
    source.expect_describe().returning(|| "mock://staff".to_string());
    source
}

/// Source that fails every fetch
pub fn failing_source(expected_calls: usize) -> MockDirectorySource {
    let mut source = MockDirectorySource::new();
    source
        .expect_fetch()
        .times(expected_calls)
        .returning(|| Err(DirectoryError::http_status(503)));
    source.expect_describe().returning(|| "mock://staff".to_string());
    source
}

/// Builder for sessions wired to test doubles
pub struct SessionBuilder {
    config: DirectoryConfig,
    source: Option<MockDirectorySource>,
    location: String,
    timers: ManualTimerSource,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: DirectoryConfig::default(),
            source: None,
            location: TEST_LOCATION.to_string(),
            timers: ManualTimerSource::default(),
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.source = Some(source_with_body(body));
        self
    }

    pub fn with_source(mut self, source: MockDirectorySource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_default_slug(mut self, slug: &str) -> Self {
        self.config = self.config.with_default_slug(slug);
        self
    }

    pub fn with_rotation_ms(mut self, millis: u64) -> Self {
        self.config = self.config.with_rotation_ms(millis);
        self
    }

    /// Build the session plus a handle on its timers
    pub fn build(self) -> (TestSession, ManualTimerSource) {
        let source = self.source.unwrap_or_else(|| source_with_body("[]".to_string()));
        let navigator = MemoryNavigator::new(Url::parse(&self.location).unwrap());
        let session = DirectorySession::new(
            self.config,
            source,
            RecordingTarget::default(),
            navigator,
            self.timers.clone(),
        );
        (session, self.timers)
    }
}
