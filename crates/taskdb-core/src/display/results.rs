//! Result wrapper types for displaying edit outcomes.
//!
//! These format the results of add, update and remove events with a
//! one-line confirmation followed, where it helps, by the affected task.

use std::fmt;

use super::models::NumberedTask;
use crate::{models::Task, session::RemoveOutcome};

/// Wrapper type for displaying the result of adding a task.
///
/// # Examples
///
/// ```rust
/// use taskdb_core::{display::CreateResult, TaskTable};
///
/// let mut table = TaskTable::create_empty();
/// let row = table.add_row("2025-10-17T09:00:00");
/// let output = CreateResult::new(row, &table[row]).to_string();
/// assert!(output.starts_with("Added task 1"));
/// ```
pub struct CreateResult<'a> {
    pub index: usize,
    pub task: &'a Task,
}

impl<'a> CreateResult<'a> {
    /// Create a new CreateResult wrapper for the task at 0-based `index`.
    pub fn new(index: usize, task: &'a Task) -> Self {
        Self { index, task }
    }
}

impl fmt::Display for CreateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added task {}", self.index + 1)?;
        writeln!(f)?;
        write!(f, "{}", NumberedTask::new(self.index, self.task))
    }
}

/// Wrapper type for displaying the result of editing a task.
///
/// Tracks the list of changes so the user sees what was modified.
pub struct UpdateResult<'a> {
    pub index: usize,
    pub task: &'a Task,
    pub changes: Vec<String>,
}

impl<'a> UpdateResult<'a> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(index: usize, task: &'a Task, changes: Vec<String>) -> Self {
        Self {
            index,
            task,
            changes,
        }
    }
}

impl fmt::Display for UpdateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task {}", self.index + 1)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", NumberedTask::new(self.index, self.task))
    }
}

/// Wrapper type for displaying the result of removing marked rows.
pub struct DeleteResult(pub RemoveOutcome);

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            RemoveOutcome::NothingMarked => {
                writeln!(f, "No rows marked. Mark rows for deletion first.")
            }
            RemoveOutcome::Removed { removed, remaining } => writeln!(
                f,
                "Removed {removed} {} ({remaining} remaining)",
                if removed == 1 { "task" } else { "tasks" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Field, table::TaskTable};

    #[test]
    fn test_update_result_lists_changes() {
        let mut table = TaskTable::create_empty();
        let row = table.add_row("2025-10-17T09:00:00");
        table
            .update_field(row, Field::Title, "Pay rent")
            .expect("Failed to set title");

        let output = UpdateResult::with_changes(
            row,
            &table[row],
            vec!["Updated title".to_string()],
        )
        .to_string();

        assert!(output.starts_with("Updated task 1\n"));
        assert!(output.contains("Changes made:\n- Updated title"));
        assert!(output.contains("### 1. Pay rent"));
    }

    #[test]
    fn test_delete_result_messages() {
        assert_eq!(
            DeleteResult(RemoveOutcome::Removed {
                removed: 2,
                remaining: 1
            })
            .to_string(),
            "Removed 2 tasks (1 remaining)\n"
        );
        assert!(DeleteResult(RemoveOutcome::NothingMarked)
            .to_string()
            .contains("No rows marked"));
    }
}
