//! Task model definition.

use serde::Serialize;

use super::TaskStatus;

/// One row of the task table.
///
/// Field order is the canonical column order; the serde renames are the
/// column headers of the task file, so serializing a `Task` with the CSV
/// writer yields exactly one canonical record. Fields are private: edits go
/// through [`crate::TaskTable`] so that `entry_time` stays write-once and
/// statuses and schedules are validated.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Task {
    /// When the row was created, stored as `YYYY-MM-DDTHH:MM:SS`
    #[serde(rename = "Entry")]
    entry_time: String,

    /// Short title of the task
    #[serde(rename = "Title / Description")]
    title: String,

    /// Notes and subtasks
    #[serde(rename = "Task")]
    detail: String,

    /// Planned time, empty when unscheduled
    #[serde(rename = "Schedule")]
    schedule_time: String,

    /// Workflow status
    #[serde(rename = "Status")]
    status: TaskStatus,
}

impl Task {
    /// Creates a fresh task stamped with `entry_time`.
    pub(crate) fn new(entry_time: impl Into<String>) -> Self {
        Self {
            entry_time: entry_time.into(),
            ..Default::default()
        }
    }

    /// Creates a task from already-coerced column values.
    pub(crate) fn from_parts(
        entry_time: String,
        title: String,
        detail: String,
        schedule_time: String,
        status: TaskStatus,
    ) -> Self {
        Self {
            entry_time,
            title,
            detail,
            schedule_time,
            status,
        }
    }

    pub fn entry_time(&self) -> &str {
        &self.entry_time
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn schedule_time(&self) -> &str {
        &self.schedule_time
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Whether a schedule has been set.
    pub fn is_scheduled(&self) -> bool {
        !self.schedule_time.is_empty()
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_detail(&mut self, detail: String) {
        self.detail = detail;
    }

    pub(crate) fn set_schedule_time(&mut self, schedule_time: String) {
        self.schedule_time = schedule_time;
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
