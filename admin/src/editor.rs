//! In-memory staff editor

use serde_json::{json, Map, Value};

use directory::core::extract_staff;
use shared::{component_debug, component_info, ComponentId};

use crate::error::{AdminError, AdminResult};

/// Form fields an operator can set on one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffEdit {
    pub slug: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub location: String,
    pub avatar: String,
    pub about_intro: String,
    pub about_detail: String,
}

impl StaffEdit {
    /// Form contents for an existing record; missing fields read as empty
    pub fn from_record(record: &Value) -> Self {
        let text = |key: &str| record.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
        let about = |key: &str| {
            record
                .get("about")
                .and_then(|about| about.get(key))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            slug: text("slug"),
            name: text("name"),
            role: text("role"),
            email: text("email"),
            location: text("location"),
            avatar: text("avatar"),
            about_intro: about("intro"),
            about_detail: about("detail"),
        }
    }

    /// Trimmed record fields, `about` as a nested object
    fn into_fields(self) -> AdminResult<Map<String, Value>> {
        let slug = self.slug.trim().to_string();
        let name = self.name.trim().to_string();
        if slug.is_empty() {
            return Err(AdminError::MissingField { field: "slug" });
        }
        if name.is_empty() {
            return Err(AdminError::MissingField { field: "name" });
        }

        let mut fields = Map::new();
        fields.insert("slug".to_string(), Value::String(slug));
        fields.insert("name".to_string(), Value::String(name));
        fields.insert("role".to_string(), Value::String(self.role.trim().to_string()));
        fields.insert("email".to_string(), Value::String(self.email.trim().to_string()));
        fields.insert("location".to_string(), Value::String(self.location.trim().to_string()));
        fields.insert("avatar".to_string(), Value::String(self.avatar.trim().to_string()));
        fields.insert(
            "about".to_string(),
            json!({
                "intro": self.about_intro.trim(),
                "detail": self.about_detail.trim(),
            }),
        );
        Ok(fields)
    }
}

/// Staff list being edited
#[derive(Debug, Clone, Default)]
pub struct StaffEditor {
    staff: Vec<Value>,
}

impl StaffEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a directory body. A body without a staff list loads as empty.
    pub fn from_payload(body: &str) -> AdminResult<Self> {
        let payload: Value = serde_json::from_str(body)?;
        let staff = extract_staff(payload).unwrap_or_default();
        component_info!(ComponentId::current(), "Loaded {} staff records", staff.len());
        Ok(Self { staff })
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    pub fn records(&self) -> &[Value] {
        &self.staff
    }

    /// Selector labels, `"<name> (<slug>)"`, in list order
    pub fn entries(&self) -> Vec<String> {
        self.staff
            .iter()
            .map(|record| {
                let field = |key: &str| record.get(key).and_then(Value::as_str).unwrap_or_default();
                format!("{} ({})", field("name"), field("slug"))
            })
            .collect()
    }

    /// Form contents for the record at `index`
    pub fn form(&self, index: usize) -> Option<StaffEdit> {
        self.staff.get(index).map(StaffEdit::from_record)
    }

    /// Apply an edit and return the index it landed at.
    ///
    /// With a valid `selected` index the edit is merged over that record,
    /// keeping any fields the form does not cover. Otherwise it is appended
    /// as a new record.
    pub fn upsert(&mut self, selected: Option<usize>, edit: StaffEdit) -> AdminResult<usize> {
        let fields = edit.into_fields()?;

        match selected.filter(|index| *index < self.staff.len()) {
            Some(index) => {
                let merged = match self.staff[index].take() {
                    Value::Object(mut existing) => {
                        existing.extend(fields);
                        existing
                    }
                    _ => fields,
                };
                self.staff[index] = Value::Object(merged);
                component_debug!(ComponentId::current(), "Updated staff record {}", index);
                Ok(index)
            }
            None => {
                self.staff.push(Value::Object(fields));
                component_debug!(ComponentId::current(), "Added staff record {}", self.staff.len() - 1);
                Ok(self.staff.len() - 1)
            }
        }
    }

    /// Pretty `{"staff": [...]}` document
    pub fn to_json(&self) -> AdminResult<String> {
        Ok(serde_json::to_string_pretty(&json!({ "staff": self.staff }))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(slug: &str, name: &str) -> StaffEdit {
        StaffEdit {
            slug: slug.to_string(),
            name: name.to_string(),
            ..StaffEdit::default()
        }
    }

    const PAYLOAD: &str = r#"{"staff":[
        {"slug":"amy","name":"Amy Pond","role":"Lead","skills":[{"name":"Rust","level":90}],
         "about":{"intro":"Hi","detail":"More"}},
        {"slug":"bo","name":"Bo Peep"}
    ]}"#;

    #[test]
    fn test_load_both_payload_shapes() {
        assert_eq!(StaffEditor::from_payload(PAYLOAD).unwrap().len(), 2);
        assert_eq!(StaffEditor::from_payload(r#"[{"slug":"a","name":"A"}]"#).unwrap().len(), 1);
        assert!(StaffEditor::from_payload(r#"{"people":[]}"#).unwrap().is_empty());
        assert!(matches!(StaffEditor::from_payload("nope"), Err(AdminError::InvalidJson { .. })));
    }

    #[test]
    fn test_entries_labels() {
        let editor = StaffEditor::from_payload(PAYLOAD).unwrap();
        assert_eq!(editor.entries(), vec!["Amy Pond (amy)", "Bo Peep (bo)"]);
    }

    #[test]
    fn test_form_reads_existing_record() {
        let editor = StaffEditor::from_payload(PAYLOAD).unwrap();
        let form = editor.form(0).unwrap();

        assert_eq!(form.role, "Lead");
        assert_eq!(form.about_intro, "Hi");
        assert_eq!(form.email, "");
        assert!(editor.form(5).is_none());
    }

    #[test]
    fn test_upsert_merges_and_keeps_unknown_fields() {
        let mut editor = StaffEditor::from_payload(PAYLOAD).unwrap();
        let mut change = editor.form(0).unwrap();
        change.role = "  Director ".to_string();

        let index = editor.upsert(Some(0), change).unwrap();

        assert_eq!(index, 0);
        let record = &editor.records()[0];
        assert_eq!(record["role"], "Director");
        assert_eq!(record["skills"][0]["name"], "Rust");
        assert_eq!(record["about"]["detail"], "More");
        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn test_upsert_appends_new_record() {
        let mut editor = StaffEditor::from_payload(PAYLOAD).unwrap();

        assert_eq!(editor.upsert(None, edit(" carl ", " Carl Sagan ")).unwrap(), 2);
        // Out-of-range selections are treated as new
        assert_eq!(editor.upsert(Some(42), edit("dee", "Dee")).unwrap(), 3);

        let record = &editor.records()[2];
        assert_eq!(record["slug"], "carl");
        assert_eq!(record["name"], "Carl Sagan");
        assert_eq!(record["about"]["intro"], "");
    }

    #[test]
    fn test_upsert_requires_slug_and_name() {
        let mut editor = StaffEditor::new();

        assert!(matches!(
            editor.upsert(None, edit("  ", "Amy")),
            Err(AdminError::MissingField { field: "slug" })
        ));
        assert!(matches!(
            editor.upsert(None, edit("amy", "")),
            Err(AdminError::MissingField { field: "name" })
        ));
        assert!(editor.is_empty());
    }

    #[test]
    fn test_to_json_wraps_staff() {
        let mut editor = StaffEditor::new();
        editor.upsert(None, edit("amy", "Amy")).unwrap();

        let out = editor.to_json().unwrap();
        assert!(out.starts_with("{\n  \"staff\": ["));

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["staff"][0]["slug"], "amy");
    }
}
