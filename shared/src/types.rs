//! Core shared types: employee records and component identity

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::errors::SharedResult;

/// Global component ID singleton - set once at startup
static COMPONENT_ID: OnceLock<ComponentId> = OnceLock::new();

/// Identifier for the binary that is currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Rotating directory display
    Kiosk,
    /// Staff data-entry tool
    Admin,
}

impl ComponentId {
    /// Initialize the global component ID for the kiosk
    pub fn init_kiosk() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Kiosk)
    }

    /// Initialize the global component ID for the admin tool
    pub fn init_admin() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Admin)
    }

    /// Get the global component ID, falling back to the kiosk when uninitialized
    pub fn current() -> &'static ComponentId {
        static FALLBACK: ComponentId = ComponentId::Kiosk;
        COMPONENT_ID.get().unwrap_or(&FALLBACK)
    }

    /// Crate name used as the tracing target for this component
    pub fn target(&self) -> &'static str {
        match self {
            ComponentId::Kiosk => "directory",
            ComponentId::Admin => "admin",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Kiosk => write!(f, "kiosk"),
            ComponentId::Admin => write!(f, "admin"),
        }
    }
}

/// One directory entry.
///
/// `slug` and `name` are guaranteed non-empty once a record has been through
/// normalization. Every other field is read leniently: `null`, absent or
/// mistyped values fall back to empty, numbers read as text and a list that
/// is not an array reads as empty. Any JSON object converts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(deserialize_with = "text")]
    pub slug: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub role: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub phone: String,
    #[serde(deserialize_with = "text")]
    pub birthday: String,
    #[serde(deserialize_with = "text")]
    pub location: String,
    #[serde(deserialize_with = "text")]
    pub avatar: String,
    /// Platform name to profile URL; non-string values are dropped
    #[serde(deserialize_with = "links")]
    pub socials: BTreeMap<String, String>,
    #[serde(deserialize_with = "record")]
    pub about: About,
    #[serde(deserialize_with = "list")]
    pub services: Vec<Service>,
    #[serde(deserialize_with = "list")]
    pub testimonials: Vec<Testimonial>,
    #[serde(deserialize_with = "list")]
    pub clients: Vec<Client>,
    #[serde(deserialize_with = "list")]
    pub experience: Vec<TimelineEntry>,
    #[serde(deserialize_with = "list")]
    pub education: Vec<TimelineEntry>,
    #[serde(deserialize_with = "list")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "list")]
    pub portfolio: Vec<Project>,
    #[serde(deserialize_with = "list")]
    pub blog: Vec<BlogPost>,
}

impl Employee {
    /// Convert one raw directory record. Only a non-object fails.
    pub fn from_value(record: Value) -> SharedResult<Self> {
        Ok(serde_json::from_value(record)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    #[serde(deserialize_with = "optional_text")]
    pub intro: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(deserialize_with = "text")]
    pub icon: String,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub avatar: String,
    #[serde(deserialize_with = "text")]
    pub quote: String,
    #[serde(deserialize_with = "text")]
    pub role: String,
    #[serde(deserialize_with = "optional_text")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub logo: String,
    #[serde(deserialize_with = "text")]
    pub url: String,
}

/// Experience or education entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub place: String,
    #[serde(deserialize_with = "text")]
    pub period: String,
    #[serde(deserialize_with = "text")]
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "text")]
    pub name: String,
    /// Percentage, clamped to 0..=100
    #[serde(deserialize_with = "percentage")]
    pub level: u32,
}

/// Portfolio project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "optional_text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "text")]
    pub image: String,
    #[serde(deserialize_with = "text")]
    pub url: String,
    #[serde(deserialize_with = "text")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub category: String,
    #[serde(deserialize_with = "text")]
    pub date: String,
    #[serde(deserialize_with = "text")]
    pub image: String,
    #[serde(deserialize_with = "text")]
    pub url: String,
    #[serde(deserialize_with = "text")]
    pub excerpt: String,
}

/// Strings as-is, numbers as their text; anything else is absent
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// Nested object; anything that is not an object reads as the default
fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    })
}

/// Array of objects; a non-array reads as empty and non-object items are skipped
fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Object of platform URLs, keeping string entries only
fn links<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(fields)) => fields,
        _ => return Ok(BTreeMap::new()),
    };
    Ok(raw
        .into_iter()
        .filter_map(|(platform, href)| match href {
            Value::String(href) => Some((platform, href)),
            _ => None,
        })
        .collect())
}

/// Accept `90`, `90.4` or `"90%"`; anything else reads as 0
fn percentage<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(raw
        .filter(|level| level.is_finite())
        .map(|level| level.clamp(0.0, 100.0).round() as u32)
        .unwrap_or(0))
}
