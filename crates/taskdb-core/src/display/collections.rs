//! Collection wrapper types for displaying the whole table.

use std::fmt;

use super::models::NumberedTask;
use crate::{models::TaskStatus, table::TaskTable};

/// Newtype wrapper for displaying a table preview.
///
/// Lists every task in table order with its 1-based row number, followed by
/// a one-line tally of statuses. Handles an empty table gracefully.
///
/// # Examples
///
/// ```rust
/// use taskdb_core::{display::Tasks, Field, TaskTable};
///
/// let mut table = TaskTable::create_empty();
/// let row = table.add_row("2025-10-17T09:00:00");
/// table.update_field(row, Field::Title, "Book dentist")?;
///
/// let output = Tasks(&table).to_string();
/// assert!(output.contains("### 1. Book dentist (○ Planned)"));
/// assert!(output.contains("1 task: 1 planned, 0 in progress, 0 done"));
///
/// let empty = TaskTable::create_empty();
/// assert_eq!(Tasks(&empty).to_string(), "No tasks found.\n");
/// # Ok::<(), taskdb_core::TaskDbError>(())
/// ```
pub struct Tasks<'a>(pub &'a TaskTable);

impl Tasks<'_> {
    fn count(&self, status: TaskStatus) -> usize {
        self.0.iter().filter(|task| task.status() == status).count()
    }
}

impl fmt::Display for Tasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }

        for (index, task) in self.0.iter().enumerate() {
            write!(f, "{}", NumberedTask::new(index, task))?;
        }

        let total = self.0.len();
        writeln!(
            f,
            "{total} {}: {} planned, {} in progress, {} done",
            if total == 1 { "task" } else { "tasks" },
            self.count(TaskStatus::Planned),
            self.count(TaskStatus::InProgress),
            self.count(TaskStatus::Done)
        )
    }
}
