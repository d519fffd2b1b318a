//! Shared logging utilities for consistent tracing across both binaries

use crate::types::ComponentId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the `EnvFilter` directive string for a component
pub fn filter_directives(component_id: &ComponentId, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");

    match component_id {
        ComponentId::Kiosk => {
            format!("directory={base_level},shared={base_level},reqwest=warn,hyper=warn")
        }
        ComponentId::Admin => {
            format!("admin={base_level},directory={base_level},shared={base_level},reqwest=warn")
        }
    }
}

/// Initialize tracing subscriber with an optional log level
///
/// `RUST_LOG`, when set, takes precedence over the component defaults.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directives = filter_directives(ComponentId::current(), log_level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for component-aware info logging
#[macro_export]
macro_rules! component_info {
    ($component_id:expr, $($arg:tt)*) => {
        tracing::info!(
            component = %$component_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware warning logging
#[macro_export]
macro_rules! component_warn {
    ($component_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            component = %$component_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware error logging
#[macro_export]
macro_rules! component_error {
    ($component_id:expr, $($arg:tt)*) => {
        tracing::error!(
            component = %$component_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware debug logging
#[macro_export]
macro_rules! component_debug {
    ($component_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            component = %$component_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component_id: &ComponentId, details: &str) {
    info!(
        component = %component_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component_id: &ComponentId, reason: &str) {
    info!(
        component = %component_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component_id: &ComponentId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}
