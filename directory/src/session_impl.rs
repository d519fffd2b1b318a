//! Directory session with dependency injection
//!
//! The session is the single owner of all mutable kiosk state. Every
//! operation runs to completion before the next event is taken off the
//! channel, so the store, the scheduler and the render target never see
//! interleaved updates.

use tokio::sync::mpsc::UnboundedReceiver;

use shared::{component_debug, component_error, component_info, component_warn, ComponentId, Employee};
use crate::config::DirectoryConfig;
use crate::core::loader::{
    fetch_directory, not_found_message, DIRECTORY_RETRY_MESSAGE, EMPTY_DIRECTORY_MESSAGE, LOADING_MESSAGE,
    MAX_LOAD_ATTEMPTS, PROFILE_NOT_FOUND_MESSAGE, PROFILE_RETRY_MESSAGE, UNAVAILABLE_MESSAGE,
};
use crate::core::renderer::render_profile;
use crate::core::scheduler::RotationScheduler;
use crate::core::slug::{resolve_slug, url_with_slug};
use crate::core::store::DirectoryStore;
use crate::traits::{DirectorySource, Navigator, RenderTarget, TimerSource};
use crate::types::{Activation, LoaderState, SessionEvent, Status, StatusChannel};

/// Kiosk session with dependency injection
pub struct DirectorySession<S, R, N, T>
where
    S: DirectorySource,
    R: RenderTarget,
    N: Navigator,
    T: TimerSource,
{
    pub config: DirectoryConfig,
    pub source: S,
    pub render_target: R,
    pub navigator: N,
    store: DirectoryStore,
    scheduler: RotationScheduler<T>,
    loader_state: LoaderState,
}

impl<S, R, N, T> DirectorySession<S, R, N, T>
where
    S: DirectorySource,
    R: RenderTarget,
    N: Navigator,
    T: TimerSource,
{
    /// Create new session; nothing is fetched or rendered until `load_directory`
    pub fn new(config: DirectoryConfig, source: S, render_target: R, navigator: N, timer_source: T) -> Self {
        let scheduler = RotationScheduler::new(timer_source, config.rotation);
        Self {
            config,
            source,
            render_target,
            navigator,
            store: DirectoryStore::new(),
            scheduler,
            loader_state: LoaderState::Idle,
        }
    }

    /// Load the directory, retrying once, then activate the requested profile
    /// and start rotation. Returns the terminal loader state.
    pub async fn load_directory(&mut self) -> LoaderState {
        for attempt in 1..=MAX_LOAD_ATTEMPTS {
            self.loader_state = LoaderState::Loading { attempt };
            self.show_loading();

            match fetch_directory(&self.source).await {
                Ok(employees) => {
                    component_info!(
                        ComponentId::current(),
                        "Loaded {} employees from {} (attempt {})",
                        employees.len(),
                        self.source.describe(),
                        attempt
                    );
                    self.finish_loading(employees);
                    return self.loader_state;
                }
                Err(e) => {
                    component_error!(
                        ComponentId::current(),
                        "Failed to load employee directory (attempt {}/{}): {}",
                        attempt,
                        MAX_LOAD_ATTEMPTS,
                        e
                    );
                    if attempt < MAX_LOAD_ATTEMPTS {
                        self.loader_state = LoaderState::Retrying { attempt };
                        self.show_retrying();
                    }
                }
            }
        }

        self.fail_loading();
        self.loader_state
    }

    /// Replace the directory with `employees`, reset the active entry
    pub fn load(&mut self, employees: Vec<Employee>) {
        self.store.load(employees);
        self.render_directory_list();
    }

    /// Show the employee with exactly this slug.
    ///
    /// Manual activations restart the rotation so the picked profile gets a
    /// full dwell period.
    pub fn activate(&mut self, slug: &str, manual: bool) -> Activation {
        if self.store.is_empty() {
            return Activation::Ignored;
        }

        match self.store.position(slug) {
            Ok(index) => self.activate_index(index, manual),
            Err(e) => {
                component_warn!(ComponentId::current(), "{}", e);
                self.store.clear_active();
                self.render_target
                    .set_status(StatusChannel::Profile, Some(&Status::error(PROFILE_NOT_FOUND_MESSAGE)));
                self.render_target.set_not_found(Some(&not_found_message(slug)));
                self.render_target.set_profile_visible(false);
                Activation::NotFound { slug: slug.to_string() }
            }
        }
    }

    /// Rotate to the successor of the active employee (or the first one)
    pub fn next(&mut self) -> Activation {
        self.advance(false)
    }

    /// Cancel the live rotation timer and arm a fresh one
    pub fn restart_rotation(&mut self) {
        self.scheduler.restart(self.store.len());
    }

    pub fn stop_rotation(&mut self) {
        self.scheduler.stop();
    }

    /// Apply one event. Returns `false` once the session should end.
    pub fn handle_event(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Tick { generation } => {
                if self.scheduler.accepts(generation) {
                    self.next();
                } else {
                    component_debug!(ComponentId::current(), "Ignoring stale rotation tick {}", generation);
                }
                true
            }
            SessionEvent::Select { slug } => {
                self.activate(&slug, true);
                true
            }
            SessionEvent::Advance => {
                self.advance(true);
                true
            }
            SessionEvent::Shutdown => {
                self.stop_rotation();
                false
            }
        }
    }

    /// Process events until shutdown or until every sender is gone
    pub async fn run(&mut self, events: &mut UnboundedReceiver<SessionEvent>) {
        while let Some(event) = events.recv().await {
            if !self.handle_event(event) {
                break;
            }
        }
        self.stop_rotation();
        component_info!(ComponentId::current(), "Directory session finished");
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn current(&self) -> Option<&Employee> {
        self.store.current()
    }

    pub fn loader_state(&self) -> LoaderState {
        self.loader_state
    }

    pub fn scheduler(&self) -> &RotationScheduler<T> {
        &self.scheduler
    }

    fn advance(&mut self, manual: bool) -> Activation {
        match self.store.successor_index() {
            Some(index) => self.activate_index(index, manual),
            None => Activation::Ignored,
        }
    }

    fn activate_index(&mut self, index: usize, manual: bool) -> Activation {
        let Some(employee) = self.store.set_active(index) else {
            return Activation::Ignored;
        };
        let slug = employee.slug.clone();
        let view = render_profile(employee, &self.config.social_platforms);

        self.render_target.set_not_found(None);
        self.render_target.set_status(StatusChannel::Profile, None);
        self.render_target.set_profile_visible(true);
        for section in &view.sections {
            self.render_target.render_section(section);
        }
        self.render_directory_list();

        let location = url_with_slug(&self.navigator.current_location(), &slug);
        self.navigator.replace_location(location);

        if manual {
            self.restart_rotation();
        }

        component_debug!(ComponentId::current(), "Showing profile {} ({})", slug, index);
        Activation::Activated { index, slug }
    }

    fn render_directory_list(&mut self) {
        self.render_target.render_directory(&self.store.list_view());
        if self.store.is_empty() {
            self.render_target
                .set_status(StatusChannel::Directory, Some(&Status::info(EMPTY_DIRECTORY_MESSAGE)));
        } else {
            self.render_target.set_status(StatusChannel::Directory, None);
        }
    }

    fn show_loading(&mut self) {
        let loading = Status::info(LOADING_MESSAGE);
        self.render_target.set_status(StatusChannel::Directory, Some(&loading));
        self.render_target.set_status(StatusChannel::Profile, Some(&loading));
        self.render_target.set_profile_visible(false);
    }

    fn show_retrying(&mut self) {
        self.render_target
            .set_status(StatusChannel::Directory, Some(&Status::info(DIRECTORY_RETRY_MESSAGE)));
        self.render_target
            .set_status(StatusChannel::Profile, Some(&Status::info(PROFILE_RETRY_MESSAGE)));
    }

    fn finish_loading(&mut self, employees: Vec<Employee>) {
        self.load(employees);
        self.render_target.set_status(StatusChannel::Directory, None);
        self.render_target.set_status(StatusChannel::Profile, None);
        self.render_target.set_profile_visible(true);
        self.render_target.set_not_found(None);
        self.loader_state = LoaderState::Ready;

        let slug = resolve_slug(&self.navigator.current_location(), self.config.default_slug.as_deref());
        self.activate(&slug, false);
        self.restart_rotation();
    }

    fn fail_loading(&mut self) {
        self.loader_state = LoaderState::Failed;
        self.load(Vec::new());
        self.stop_rotation();
        self.render_target.set_profile_visible(false);
        self.render_target.set_not_found(Some(PROFILE_NOT_FOUND_MESSAGE));

        let unavailable = Status::error(UNAVAILABLE_MESSAGE);
        self.render_target.set_status(StatusChannel::Directory, Some(&unavailable));
        self.render_target.set_status(StatusChannel::Profile, Some(&unavailable));
        component_error!(
            ComponentId::current(),
            "Staff directory unavailable after {} attempts",
            MAX_LOAD_ATTEMPTS
        );
    }
}
