//! Payload extraction and record normalization
//!
//! Directory data is untrusted: the body may be a bare array or an object
//! with a `staff` array, and individual records may be missing their identity
//! fields. Nothing here fails on bad records; they are filtered out.

use serde_json::{Map, Value};
use shared::{Employee, component_warn, ComponentId};

use crate::error::{DirectoryError, DirectoryResult};

/// Pull the staff list out of a response body.
///
/// Accepts `[...]` or `{"staff": [...]}`. A body that is not JSON, or JSON of
/// any other shape, is a parse error.
pub fn parse_payload(body: &str) -> DirectoryResult<Vec<Value>> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| DirectoryError::parse(format!("Invalid JSON: {e}")))?;

    extract_staff(payload).ok_or_else(|| DirectoryError::parse("Directory response missing staff"))
}

/// Staff list of an already-decoded payload, if it has one
pub fn extract_staff(payload: Value) -> Option<Vec<Value>> {
    match payload {
        Value::Array(entries) => Some(entries),
        Value::Object(mut fields) => match fields.remove("staff") {
            Some(Value::Array(entries)) => Some(entries),
            _ => None,
        },
        _ => None,
    }
}

/// Keep records with a non-blank string `slug` and `name`; canonicalize the slug.
///
/// Other fields are passed through untouched.
pub fn normalize_records(entries: Vec<Value>) -> Vec<Map<String, Value>> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(record) => Some(record),
            _ => None,
        })
        .filter(|record| non_blank(record, "slug").is_some() && non_blank(record, "name").is_some())
        .map(|mut record| {
            let slug = non_blank(&record, "slug").map(canonical_slug).unwrap_or_default();
            record.insert("slug".to_string(), Value::String(slug));
            record
        })
        .collect()
}

/// Normalize and convert into typed employees.
///
/// Every record that survives the slug/name filter becomes an employee;
/// nested fields are read leniently by `Employee` itself.
pub fn normalize_employees(entries: Vec<Value>) -> Vec<Employee> {
    normalize_records(entries).into_iter().map(into_employee).collect()
}

fn into_employee(record: Map<String, Value>) -> Employee {
    let slug = non_blank(&record, "slug").unwrap_or_default().to_string();
    let name = non_blank(&record, "name").unwrap_or_default().to_string();
    Employee::from_value(Value::Object(record)).unwrap_or_else(|e| {
        component_warn!(ComponentId::current(), "Directory entry {} kept with identity only: {}", slug, e);
        Employee { slug, name, ..Employee::default() }
    })
}

/// Trimmed, lower-cased slug
pub fn canonical_slug(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn non_blank<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
}
