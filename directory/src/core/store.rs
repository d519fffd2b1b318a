//! Directory store: the employee list and the active index
//!
//! Pure state with no I/O. The session drives rendering, URL updates and
//! rotation around these transitions.

use shared::Employee;

use crate::error::{DirectoryError, DirectoryResult};
use crate::types::{DirectoryEntryView, DirectoryListView};

/// Sole owner of the loaded directory and the active position in it
#[derive(Debug, Default, Clone)]
pub struct DirectoryStore {
    employees: Vec<Employee>,
    current_index: Option<usize>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the directory wholesale and forget the active entry
    pub fn load(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.current_index = None;
    }

    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current(&self) -> Option<&Employee> {
        self.current_index.and_then(|index| self.employees.get(index))
    }

    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    /// Index of the first employee with exactly this slug
    pub fn position(&self, slug: &str) -> DirectoryResult<usize> {
        self.employees
            .iter()
            .position(|employee| employee.slug == slug)
            .ok_or_else(|| DirectoryError::NotFound { slug: slug.to_string() })
    }

    /// Make `index` active; out-of-range indices leave the state untouched
    pub fn set_active(&mut self, index: usize) -> Option<&Employee> {
        if index >= self.employees.len() {
            return None;
        }
        self.current_index = Some(index);
        self.employees.get(index)
    }

    pub fn clear_active(&mut self) {
        self.current_index = None;
    }

    /// Index the rotation moves to next: wraps at the end, starts at 0 when
    /// nothing is active. `None` on an empty directory.
    pub fn successor_index(&self) -> Option<usize> {
        if self.employees.is_empty() {
            return None;
        }
        Some(match self.current_index {
            Some(index) => (index + 1) % self.employees.len(),
            None => 0,
        })
    }

    /// Directory list with the active entry highlighted
    pub fn list_view(&self) -> DirectoryListView {
        DirectoryListView {
            entries: self
                .employees
                .iter()
                .enumerate()
                .map(|(index, employee)| DirectoryEntryView {
                    slug: employee.slug.clone(),
                    name: employee.name.clone(),
                    role: employee.role.clone(),
                    active: self.current_index == Some(index),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(slug: &str, name: &str) -> Employee {
        Employee {
            slug: slug.to_string(),
            name: name.to_string(),
            ..Employee::default()
        }
    }

    fn store_with(slugs: &[&str]) -> DirectoryStore {
        let mut store = DirectoryStore::new();
        store.load(slugs.iter().map(|s| employee(s, &s.to_uppercase())).collect());
        store
    }

    #[test]
    fn test_load_resets_active_index() {
        let mut store = store_with(&["amy", "bo"]);
        store.set_active(1);
        assert_eq!(store.current_index(), Some(1));

        store.load(vec![employee("carl", "Carl")]);
        assert_eq!(store.current_index(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_position_is_case_sensitive_first_match() {
        let mut store = DirectoryStore::new();
        store.load(vec![employee("amy", "First"), employee("bo", "Bo"), employee("amy", "Second")]);

        assert_eq!(store.position("amy").unwrap(), 0);
        assert!(matches!(store.position("AMY"), Err(DirectoryError::NotFound { slug }) if slug == "AMY"));
    }

    #[test]
    fn test_set_active_rejects_out_of_range() {
        let mut store = store_with(&["amy"]);
        assert!(store.set_active(3).is_none());
        assert_eq!(store.current_index(), None);
    }

    #[test]
    fn test_successor_wraps_and_starts_at_zero() {
        let mut store = store_with(&["amy", "bo", "carl"]);
        assert_eq!(store.successor_index(), Some(0));

        store.set_active(2);
        assert_eq!(store.successor_index(), Some(0));

        store.set_active(0);
        assert_eq!(store.successor_index(), Some(1));

        assert_eq!(DirectoryStore::new().successor_index(), None);
    }

    #[test]
    fn test_list_view_marks_active_entry() {
        let mut store = store_with(&["amy", "bo"]);
        store.set_active(1);

        let view = store.list_view();
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.active().map(|e| e.slug.as_str()), Some("bo"));
        assert!(!view.entries[0].active);
    }
}
