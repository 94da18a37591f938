//! In-memory task storage.
//!
//! [`TaskStore`] owns the authoritative collection of tasks for one
//! session and enforces the data invariants: unique ascending ids
//! assigned from 1 and never reused, non-empty titles, and field
//! length ceilings. Callers receive cloned snapshots, never references
//! into the store's own records.

use crate::config::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use crate::task::Task;
use thiserror::Error;

/// Errors raised when a caller supplies task fields that violate the
/// store's contract.
///
/// Unknown ids are not an error; operations keyed by id report those
/// through `false` or `None` results instead.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// The title was empty or whitespace-only after trimming.
    #[error("Title cannot be empty")]
    EmptyTitle,
    /// The trimmed title exceeded [`MAX_TITLE_LENGTH`] characters.
    #[error("Title must not exceed {MAX_TITLE_LENGTH} characters")]
    TitleTooLong,
    /// The trimmed description exceeded [`MAX_DESCRIPTION_LENGTH`] characters.
    #[error("Description must not exceed {MAX_DESCRIPTION_LENGTH} characters")]
    DescriptionTooLong,
}

/// Owns all tasks of a session and the counter for the next id.
///
/// Tasks are kept in insertion order. Removing a task never frees its
/// id for reuse.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store. The first created task gets id 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a new task from the given title and description.
    ///
    /// Both inputs are trimmed before validation. The new task starts
    /// incomplete and is appended after all existing tasks.
    ///
    /// # Returns
    ///
    /// The id assigned to the new task, or a [`ValidationError`] if the
    /// trimmed title is empty or either field exceeds its length
    /// ceiling. On error the store is left unchanged.
    pub fn create(&mut self, title: &str, description: &str) -> Result<u32, ValidationError> {
        let title = validate_title(title)?;
        let description = validate_description(description)?;

        let id = self.next_id;
        self.tasks.push(Task::new(id, title, description));
        self.next_id += 1;
        Ok(id)
    }

    /// Returns a snapshot of all tasks in insertion order.
    ///
    /// An empty store yields an empty vector.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns a snapshot of the task with the given id, or `None` if
    /// no such task exists.
    pub fn get(&self, id: u32) -> Option<Task> {
        self.find(id).cloned()
    }

    /// Updates the title and/or description of an existing task.
    ///
    /// Fields passed as `None` are left unchanged. Supplied fields are
    /// trimmed and validated before anything is applied, so a failing
    /// field never leaves the task half-updated.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the task was updated
    /// * `Ok(false)` if no task with the given id exists
    /// * `Err(ValidationError)` if a supplied field fails validation;
    ///   the task keeps all of its existing values
    pub fn update(
        &mut self,
        id: u32,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<bool, ValidationError> {
        let new_title = title.map(validate_title).transpose()?;
        let new_description = description.map(validate_description).transpose()?;

        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        if let Some(title) = new_title {
            task.set_title(title);
        }
        if let Some(description) = new_description {
            task.set_description(description);
        }
        Ok(true)
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Returns `false` if no such task exists, `true` otherwise.
    pub fn toggle_completion(&mut self, id: u32) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.toggle_completed();
                true
            }
            None => false,
        }
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` if no such task exists, `true` if it was
    /// removed. Removed ids are never reassigned.
    pub fn remove(&mut self, id: u32) -> bool {
        match self.tasks.iter().position(|task| task.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the id the next created task would get, without
    /// advancing the counter.
    pub fn peek_next_id(&self) -> u32 {
        self.next_id
    }

    /// Returns the number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}

/// Trims the title and checks the non-empty and length invariants.
fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

/// Trims the description and checks the length invariant. Empty is fine.
fn validate_description(description: &str) -> Result<String, ValidationError> {
    let description = description.trim();
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(description.to_string())
}



#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn create_rejects_empty_title() {
        let mut store = TaskStore::new();

        let result = store.create("", "");

        assert_eq!(result, Err(ValidationError::EmptyTitle));
        assert!(store.is_empty());
    }

    #[test]
    fn create_rejects_whitespace_only_title() {
        let mut store = TaskStore::new();

        let result = store.create("   ", "x");

        assert_eq!(result, Err(ValidationError::EmptyTitle));
        assert!(store.is_empty());
    }

    #[test]
    fn create_rejects_title_over_ceiling() {
        let mut store = TaskStore::new();

        let result = store.create(&"a".repeat(MAX_TITLE_LENGTH + 1), "");

        assert_eq!(result, Err(ValidationError::TitleTooLong));
        assert!(store.is_empty());
    }

    #[test]
    fn create_accepts_title_at_ceiling() {
        let mut store = TaskStore::new();

        let id = store.create(&"a".repeat(MAX_TITLE_LENGTH), "").unwrap();

        assert_eq!(store.get(id).unwrap().title().chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn create_rejects_description_over_ceiling() {
        let mut store = TaskStore::new();

        let result = store.create("ok", &"b".repeat(MAX_DESCRIPTION_LENGTH + 1));

        assert_eq!(result, Err(ValidationError::DescriptionTooLong));
        assert!(store.is_empty());
    }

    #[test]
    fn title_surrounded_by_whitespace_is_measured_after_trimming() {
        let mut store = TaskStore::new();
        let padded = format!("   {}   ", "a".repeat(MAX_TITLE_LENGTH));

        let id = store.create(&padded, "").unwrap();

        assert_eq!(store.get(id).unwrap().title().chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn update_with_invalid_title_keeps_existing_value() {
        let mut store = TaskStore::new();
        let id = store.create("Buy milk", "2%").unwrap();

        let result = store.update(id, Some("   "), None);

        assert_eq!(result, Err(ValidationError::EmptyTitle));
        assert_eq!(store.get(id).unwrap().title(), "Buy milk");
    }

    #[test]
    fn update_never_applies_partially() {
        let mut store = TaskStore::new();
        let id = store.create("Buy milk", "2%").unwrap();

        // Valid title plus an invalid description must change nothing.
        let result = store.update(
            id,
            Some("Buy oat milk"),
            Some(&"b".repeat(MAX_DESCRIPTION_LENGTH + 1)),
        );

        assert_eq!(result, Err(ValidationError::DescriptionTooLong));
        let task = store.get(id).unwrap();
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.description(), "2%");
    }

    #[test]
    fn validation_error_messages_name_the_rule() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "Title cannot be empty");
        assert_eq!(
            ValidationError::TitleTooLong.to_string(),
            "Title must not exceed 200 characters"
        );
        assert_eq!(
            ValidationError::DescriptionTooLong.to_string(),
            "Description must not exceed 1000 characters"
        );
    }
}

#[cfg(test)]
mod mutation_tests {
    use super::*;

    #[test]
    fn update_changes_supplied_fields_only() {
        let mut store = TaskStore::new();
        let id = store.create("Buy milk", "2%").unwrap();

        let updated = store.update(id, Some("Buy oat milk"), None).unwrap();

        assert!(updated);
        let task = store.get(id).unwrap();
        assert_eq!(task.title(), "Buy oat milk");
        assert_eq!(task.description(), "2%");
    }

    #[test]
    fn update_trims_supplied_fields() {
        let mut store = TaskStore::new();
        let id = store.create("Buy milk", "").unwrap();

        store.update(id, Some("  Buy oat milk  "), Some("  oat  ")).unwrap();

        let task = store.get(id).unwrap();
        assert_eq!(task.title(), "Buy oat milk");
        assert_eq!(task.description(), "oat");
    }

    #[test]
    fn update_with_no_fields_is_a_no_op_returning_true() {
        let mut store = TaskStore::new();
        let id = store.create("Buy milk", "2%").unwrap();
        let before = store.get(id).unwrap();

        let updated = store.update(id, None, None).unwrap();

        assert!(updated);
        assert_eq!(store.get(id).unwrap(), before);
    }

    #[test]
    fn update_unknown_id_returns_false() {
        let mut store = TaskStore::new();

        let updated = store.update(42, Some("Anything"), None).unwrap();

        assert!(!updated);
    }

    #[test]
    fn toggle_flips_completion_and_is_idempotent_when_doubled() {
        let mut store = TaskStore::new();
        let id = store.create("Buy milk", "").unwrap();

        assert!(store.toggle_completion(id));
        assert!(store.get(id).unwrap().completed());

        assert!(store.toggle_completion(id));
        assert!(!store.get(id).unwrap().completed());
    }

    #[test]
    fn toggle_unknown_id_returns_false() {
        let mut store = TaskStore::new();

        assert!(!store.toggle_completion(7));
    }

    #[test]
    fn remove_deletes_the_task() {
        let mut store = TaskStore::new();
        let id1 = store.create("Buy milk", "").unwrap();
        let id2 = store.create("Clean", "").unwrap();

        assert!(store.remove(id1));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id1), None);
        assert!(store.get(id2).is_some());
    }

    #[test]
    fn remove_unknown_id_returns_false() {
        let mut store = TaskStore::new();
        store.create("Buy milk", "").unwrap();

        assert!(!store.remove(99));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn end_to_end_store_scenario() {
        let mut store = TaskStore::new();

        let id1 = store.create("Buy milk", "2%").unwrap();
        assert_eq!(id1, 1);
        assert!(!store.get(id1).unwrap().completed());

        let id2 = store.create("Clean", "").unwrap();
        assert_eq!(id2, 2);

        let tasks = store.tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id(), 1);
        assert_eq!(tasks[1].id(), 2);

        assert!(store.toggle_completion(1));
        assert!(store.get(1).unwrap().completed());

        assert!(store.remove(2));
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.get(2), None);

        assert!(store.update(1, Some("Buy oat milk"), None).unwrap());
        assert_eq!(store.get(1).unwrap().title(), "Buy oat milk");
    }
}
