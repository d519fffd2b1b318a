//! Kiosk configuration: defaults, environment overrides and validation

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::error::{DirectoryError, DirectoryResult};

pub const DEFAULT_DIRECTORY_URL: &str = "https://portal.quoralinex.com/directory-api/employees";
pub const DEFAULT_ROTATION_MS: u64 = 12_000;
pub const DEFAULT_SOCIAL_PLATFORMS: [&str; 4] = ["facebook", "twitter", "instagram", "linkedin"];

pub const ENV_SOURCE: &str = "DIRECTORY_SOURCE";
pub const ENV_ROTATION_MS: &str = "DIRECTORY_ROTATION_MS";
pub const ENV_DEFAULT_EMPLOYEE: &str = "DIRECTORY_DEFAULT_EMPLOYEE";
pub const ENV_SOCIAL_PLATFORMS: &str = "DIRECTORY_SOCIAL_PLATFORMS";

/// Where the directory payload comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Http(Url),
    File(PathBuf),
}

impl FromStr for SourceLocation {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DirectoryError::config("Directory source must not be empty"));
        }

        let lower = trimmed.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|e| DirectoryError::config(format!("Invalid directory URL {trimmed}: {e}")))?;
            Ok(SourceLocation::Http(url))
        } else {
            Ok(SourceLocation::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Http(url) => write!(f, "{url}"),
            SourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Kiosk configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub source: SourceLocation,
    /// Dwell time per employee before rotating
    pub rotation: Duration,
    /// Slug used when the location names nobody
    pub default_slug: Option<String>,
    /// Social-link slots present in the template
    pub social_platforms: Vec<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            // The constant is a valid absolute URL
            source: DEFAULT_DIRECTORY_URL
                .parse()
                .unwrap_or_else(|_| SourceLocation::File(PathBuf::from("staff.json"))),
            rotation: Duration::from_millis(DEFAULT_ROTATION_MS),
            default_slug: None,
            social_platforms: DEFAULT_SOCIAL_PLATFORMS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> DirectoryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, starting from defaults
    pub fn from_lookup<F>(lookup: F) -> DirectoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(source) = lookup(ENV_SOURCE).filter(|v| !v.trim().is_empty()) {
            config.source = source.parse()?;
        }

        if let Some(raw) = lookup(ENV_ROTATION_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|_| {
                DirectoryError::SharedError(shared::SharedError::InvalidConfig {
                    field: ENV_ROTATION_MS.to_string(),
                    value: raw.clone(),
                })
            })?;
            config.rotation = Duration::from_millis(millis);
        }

        if let Some(slug) = lookup(ENV_DEFAULT_EMPLOYEE) {
            config = config.with_default_slug(slug);
        }

        if let Some(raw) = lookup(ENV_SOCIAL_PLATFORMS) {
            config.social_platforms = raw
                .split(',')
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = source;
        self
    }

    pub fn with_rotation_ms(mut self, millis: u64) -> Self {
        self.rotation = Duration::from_millis(millis);
        self
    }

    /// Blank slugs clear the default
    pub fn with_default_slug(mut self, slug: impl Into<String>) -> Self {
        let slug = slug.into().trim().to_lowercase();
        self.default_slug = if slug.is_empty() { None } else { Some(slug) };
        self
    }

    pub fn validate(&self) -> DirectoryResult<()> {
        if self.rotation.is_zero() {
            return Err(DirectoryError::config("Rotation interval must be greater than zero"));
        }
        Ok(())
    }
}
