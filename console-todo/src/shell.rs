//! Menu-driven console interface over a [`TaskStore`].
//!
//! The shell owns the store for one session, renders the fixed
//! six-action menu, and translates store results into the text the
//! operator sees. It is generic over its reader and writer so tests can
//! drive whole sessions through in-memory buffers. End of input behaves
//! like choosing Exit.

use crate::config::MENU_OPTIONS;
use crate::store::TaskStore;
use crate::task::Task;
use log::debug;
use std::io::{self, BufRead, Write};

/// Outcome of asking the operator to pick a task by id.
enum Selection {
    /// A stored task was chosen; a snapshot of it.
    Task(Task),
    /// The interaction finished on its own (empty store, bad or unknown
    /// id); a message has already been printed.
    Done,
    /// Input ended mid-prompt.
    Eof,
}

/// Interactive session loop around a [`TaskStore`].
pub struct Shell<R, W> {
    store: TaskStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs the menu loop until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Console Todo App!")?;

        loop {
            self.display_menu()?;
            let Some(choice) = self.prompt("\nSelect an option (1-6): ")? else {
                break;
            };
            let keep_going = match choice.parse::<u32>() {
                Ok(1) => self.handle_add()?,
                Ok(2) => self.handle_view()?,
                Ok(3) => self.handle_update()?,
                Ok(4) => self.handle_delete()?,
                Ok(5) => self.handle_toggle()?,
                Ok(6) => false,
                _ => {
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number between 1 and 6."
                    )?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "\nThank you for using the Console Todo App. Goodbye!")?;
        Ok(())
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(40);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "         CONSOLE TODO APP")?;
        writeln!(self.output, "{rule}")?;
        for (number, label) in MENU_OPTIONS.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, label)?;
        }
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    /// Writes the prompt and reads one trimmed line.
    ///
    /// Returns `None` when the input stream is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn handle_add(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Add New Task ---")?;

        let Some(title) = self.prompt("Enter task title (required): ")? else {
            return Ok(false);
        };
        let Some(description) =
            self.prompt("Enter task description (optional, press Enter to skip): ")?
        else {
            return Ok(false);
        };

        match self.store.create(&title, &description) {
            Ok(id) => {
                debug!("Created task {id}");
                writeln!(self.output, "Task added successfully with ID: {id}")?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(true)
    }

    fn handle_view(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- View All Tasks ---")?;

        let tasks = self.store.tasks();
        if tasks.is_empty() {
            writeln!(self.output, "No tasks found. Your todo list is empty.")?;
            return Ok(true);
        }

        writeln!(self.output, "Found {} task(s):", tasks.len())?;
        writeln!(self.output, "{}", "-".repeat(60))?;
        for task in tasks {
            writeln!(self.output, "{task}")?;
            if !task.description().is_empty() {
                writeln!(self.output, "    Description: {}", task.description())?;
            }
            writeln!(self.output)?;
        }
        Ok(true)
    }

    fn handle_update(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Update Task ---")?;

        let task = match self.select_task("update", "\nEnter the task ID to update: ")? {
            Selection::Task(task) => task,
            Selection::Done => return Ok(true),
            Selection::Eof => return Ok(false),
        };

        writeln!(self.output, "Current task details:")?;
        writeln!(self.output, "  Title: {}", task.title())?;
        writeln!(self.output, "  Description: {}", display_description(&task))?;

        let Some(new_title) = self.prompt("\nEnter new title (press Enter to keep current): ")?
        else {
            return Ok(false);
        };
        let Some(new_description) =
            self.prompt("Enter new description (press Enter to keep current): ")?
        else {
            return Ok(false);
        };

        // Empty input means "keep the current value".
        let title = (!new_title.is_empty()).then_some(new_title.as_str());
        let description = (!new_description.is_empty()).then_some(new_description.as_str());

        match self.store.update(task.id(), title, description) {
            Ok(true) => {
                debug!("Updated task {}", task.id());
                writeln!(self.output, "Task updated successfully!")?;
                if let Some(updated) = self.store.get(task.id()) {
                    writeln!(self.output, "New details:")?;
                    writeln!(self.output, "  ID: {}", updated.id())?;
                    writeln!(self.output, "  Title: {}", updated.title())?;
                    writeln!(self.output, "  Description: {}", display_description(&updated))?;
                    let status = if updated.completed() {
                        "[x] Complete"
                    } else {
                        "[ ] Incomplete"
                    };
                    writeln!(self.output, "  Status: {status}")?;
                }
            }
            Ok(false) => writeln!(self.output, "Error: Could not update task.")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(true)
    }

    fn handle_toggle(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Mark Task as Complete/Incomplete ---")?;

        let task = match self.select_task(
            "mark",
            "\nEnter the task ID to toggle completion status: ",
        )? {
            Selection::Task(task) => task,
            Selection::Done => return Ok(true),
            Selection::Eof => return Ok(false),
        };

        if self.store.toggle_completion(task.id()) {
            debug!("Toggled task {}", task.id());
            if let Some(updated) = self.store.get(task.id()) {
                let status = if updated.completed() { "complete" } else { "incomplete" };
                writeln!(
                    self.output,
                    "Task '{}' marked as {status}.",
                    updated.title()
                )?;
                writeln!(self.output, "New status: {updated}")?;
            }
        } else {
            writeln!(self.output, "Error: Could not toggle task completion status.")?;
        }
        Ok(true)
    }

    fn handle_delete(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Delete Task ---")?;

        let task = match self.select_task("delete", "\nEnter the task ID to delete: ")? {
            Selection::Task(task) => task,
            Selection::Done => return Ok(true),
            Selection::Eof => return Ok(false),
        };

        let confirmation = format!(
            "Are you sure you want to delete task '{}'? (y/N): ",
            task.title()
        );
        let Some(answer) = self.prompt(&confirmation)? else {
            return Ok(false);
        };
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            writeln!(self.output, "Task deletion cancelled.")?;
            return Ok(true);
        }

        if self.store.remove(task.id()) {
            debug!("Deleted task {}", task.id());
            writeln!(
                self.output,
                "Task '{}' (ID: {}) deleted successfully.",
                task.title(),
                task.id()
            )?;
        } else {
            writeln!(self.output, "Error: Could not delete task.")?;
        }
        Ok(true)
    }

    /// Lists the current tasks and asks for an id.
    ///
    /// `verb` names the pending action in the empty-store message;
    /// `id_prompt` is the full id prompt text.
    fn select_task(&mut self, verb: &str, id_prompt: &str) -> io::Result<Selection> {
        if self.store.is_empty() {
            writeln!(
                self.output,
                "No tasks available to {verb}. Please add some tasks first."
            )?;
            return Ok(Selection::Done);
        }

        writeln!(self.output, "Current tasks:")?;
        for task in self.store.tasks() {
            writeln!(self.output, "  {task}")?;
        }

        let Some(raw) = self.prompt(id_prompt)? else {
            return Ok(Selection::Eof);
        };
        let Ok(id) = raw.parse::<u32>() else {
            writeln!(self.output, "Error: Task ID must be a number.")?;
            return Ok(Selection::Done);
        };
        match self.store.get(id) {
            Some(task) => Ok(Selection::Task(task)),
            None => {
                writeln!(self.output, "Error: Task with ID {id} does not exist.")?;
                Ok(Selection::Done)
            }
        }
    }
}

fn display_description(task: &Task) -> &str {
    if task.description().is_empty() {
        "(No description)"
    } else {
        task.description()
    }
}
