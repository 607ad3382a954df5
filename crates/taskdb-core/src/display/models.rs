//! Display implementations for domain models.
//!
//! Tasks render as markdown: a heading with the title and status marker,
//! a short metadata list with friendly timestamps, then the notes as a
//! paragraph.

use std::fmt;

use super::datetime::FriendlyTime;
use crate::models::{Task, TaskStatus};

/// Heading text for a task without a title.
const UNTITLED: &str = "(untitled)";

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Task {
    fn fmt_task(&self, row: Option<usize>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self.title().trim() {
            "" => UNTITLED,
            title => title,
        };
        match row {
            Some(row) => writeln!(f, "### {row}. {title} ({})", self.status().with_icon())?,
            None => writeln!(f, "### {title} ({})", self.status().with_icon())?,
        }
        writeln!(f)?;

        writeln!(f, "- Entry: {}", FriendlyTime(self.entry_time()))?;
        writeln!(f, "- Schedule: {}", FriendlyTime(self.schedule_time()))?;

        let detail = self.detail().trim();
        if !detail.is_empty() {
            writeln!(f)?;
            writeln!(f, "{detail}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_task(None, f)
    }
}

/// A task shown with its 1-based row number, as in table previews.
pub struct NumberedTask<'a> {
    pub row: usize,
    pub task: &'a Task,
}

impl<'a> NumberedTask<'a> {
    /// Wraps the task at 0-based `index`.
    pub fn new(index: usize, task: &'a Task) -> Self {
        Self {
            row: index + 1,
            task,
        }
    }
}

impl fmt::Display for NumberedTask<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.task.fmt_task(Some(self.row), f)
    }
}
