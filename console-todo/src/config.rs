//! Shared constants for the console todo app.

/// Maximum number of characters a task title may have after trimming.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum number of characters a task description may have after trimming.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// List-line marker for a completed task.
pub const COMPLETED_INDICATOR: &str = "[x]";

/// List-line marker for an incomplete task.
pub const INCOMPLETE_INDICATOR: &str = "[ ]";

/// Labels of the main menu, in display order. Menu choices are 1-based.
pub const MENU_OPTIONS: [&str; 6] = [
    "Add task",
    "View tasks",
    "Update task",
    "Delete task",
    "Mark as complete/incomplete",
    "Exit",
];
