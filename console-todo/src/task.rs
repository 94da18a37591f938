use crate::config;
use std::fmt::{Display, Formatter};

/// A single todo record.
///
/// Tasks are created and mutated only by the store; callers get clones.
/// The id is assigned at creation time and never changes.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Task {
    id: u32,
    title: String,
    description: String,
    completed: bool,
}

impl Task {
    pub(crate) fn new(id: u32, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
        }
    }

    /// Returns the id of the task.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the title of the task.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description of the task. May be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been marked as complete.
    pub fn completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub(crate) fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

impl Display for Task {
    /// Renders the one-line list form, e.g. `1. [x] Buy milk`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let indicator = if self.completed {
            config::COMPLETED_INDICATOR
        } else {
            config::INCOMPLETE_INDICATOR
        };
        write!(f, "{}. {} {}", self.id, indicator, self.title)
    }
}
