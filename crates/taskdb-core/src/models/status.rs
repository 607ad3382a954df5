//! Task status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
///
/// The stored literals are the variant names exactly (`Planned`,
/// `InProgress`, `Done`). Matching is case-sensitive: `done` is not a status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Task is recorded but not started
    #[default]
    Planned,

    /// Task is being worked on
    InProgress,

    /// Task is finished
    Done,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planned" => Ok(TaskStatus::Planned),
            "InProgress" => Ok(TaskStatus::InProgress),
            "Done" => Ok(TaskStatus::Done),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// All statuses in workflow order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Planned, TaskStatus::InProgress, TaskStatus::Done];

    /// Stored literal written to the task file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "Planned",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Done => "Done",
        }
    }

    /// Bulk-load coercion: anything that is not exactly a stored literal
    /// becomes `Planned`.
    pub fn coerce(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Human label used in previews.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "Planned",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Get status with a marker for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskdb_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(TaskStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(TaskStatus::Planned.with_icon(), "○ Planned");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Done => "✓ Done",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::Planned => "○ Planned",
        }
    }
}
