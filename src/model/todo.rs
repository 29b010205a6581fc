//! The to-do list container.
//!
//! `TodoList` is deliberately immutable: every operation returns a new list
//! and leaves the receiver untouched. The list actor leans on this — it can
//! hand the old state to the persistence tier and adopt the new one without
//! any aliasing questions. All operations are total; unknown ids are no-ops,
//! never errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoEntry {
    /// Assigned by the list, starting at 1, never reused.
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
}

/// Payload for adding a new entry; the id is assigned by the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    pub date: NaiveDate,
}

impl TodoCreate {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }
}

/// Patch for an existing entry; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
}

/// An immutable collection of to-do entries, keyed by auto-incrementing id.
///
/// Entries keep insertion order; `next_id` counts up from 1 and is part of
/// the persisted state, so ids stay unique across delete and reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    next_id: u64,
    entries: Vec<TodoEntry>,
}

impl TodoList {
    /// An empty list whose first entry will get id 1.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// A copy of this list with the new entry appended.
    pub fn add(&self, create: TodoCreate) -> Self {
        let mut next = self.clone();
        next.entries.push(TodoEntry {
            id: next.next_id,
            title: create.title,
            date: create.date,
        });
        next.next_id += 1;
        next
    }

    /// A copy of this list with the patch applied to entry `id`; unchanged
    /// if no such entry exists.
    pub fn update(&self, id: u64, patch: &TodoUpdate) -> Self {
        let mut next = self.clone();
        if let Some(entry) = next.entries.iter_mut().find(|e| e.id == id) {
            if let Some(title) = &patch.title {
                entry.title = title.clone();
            }
            if let Some(date) = patch.date {
                entry.date = date;
            }
        }
        next
    }

    /// A copy of this list without entry `id`; unchanged if no such entry
    /// exists.
    pub fn delete(&self, id: u64) -> Self {
        let mut next = self.clone();
        next.entries.retain(|e| e.id != id);
        next
    }

    /// Entries scheduled on `date`, in insertion order.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<TodoEntry> {
        self.entries
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect()
    }

    pub fn entries(&self) -> &[TodoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn add_assigns_incrementing_ids_from_one() {
        let list = TodoList::new()
            .add(TodoCreate::new("Dentist", day(1)))
            .add(TodoCreate::new("Shopping", day(2)))
            .add(TodoCreate::new("Movies", day(1)));

        let ids: Vec<u64> = list.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn entries_on_filters_by_date_in_insertion_order() {
        let list = TodoList::new()
            .add(TodoCreate::new("Dentist", day(1)))
            .add(TodoCreate::new("Shopping", day(2)))
            .add(TodoCreate::new("Movies", day(1)));

        let titles: Vec<String> = list
            .entries_on(day(1))
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Dentist", "Movies"]);
        assert_eq!(list.entries_on(day(3)), vec![]);
    }

    #[test]
    fn operations_leave_the_original_untouched() {
        let original = TodoList::new().add(TodoCreate::new("Dentist", day(1)));
        let _ = original.add(TodoCreate::new("Movies", day(1)));
        let _ = original.delete(1);
        assert_eq!(original.len(), 1);
    }

    #[test]
    fn delete_skips_ids_and_never_reuses_them() {
        let list = TodoList::new()
            .add(TodoCreate::new("a", day(1)))
            .add(TodoCreate::new("b", day(1)))
            .delete(1)
            .add(TodoCreate::new("c", day(1)));

        let ids: Vec<u64> = list.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn update_patches_only_given_fields_and_ignores_unknown_ids() {
        let list = TodoList::new().add(TodoCreate::new("Dentist", day(1)));

        let renamed = list.update(
            1,
            &TodoUpdate {
                title: Some("Orthodontist".into()),
                date: None,
            },
        );
        assert_eq!(renamed.entries()[0].title, "Orthodontist");
        assert_eq!(renamed.entries()[0].date, day(1));

        let unchanged = list.update(42, &TodoUpdate::default());
        assert_eq!(unchanged, list);
    }
}
