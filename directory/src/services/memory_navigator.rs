//! In-memory navigation context

use url::Url;
use shared::{component_debug, ComponentId};

use crate::traits::Navigator;

/// Holds the current location; replacements are recorded, never navigated
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    location: Url,
    replacements: usize,
}

impl MemoryNavigator {
    pub fn new(location: Url) -> Self {
        Self { location, replacements: 0 }
    }

    /// Number of times the location has been replaced
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Navigator for MemoryNavigator {
    fn current_location(&self) -> Url {
        self.location.clone()
    }

    fn replace_location(&mut self, url: Url) {
        component_debug!(ComponentId::current(), "Location replaced: {}", url);
        self.location = url;
        self.replacements += 1;
    }
}
