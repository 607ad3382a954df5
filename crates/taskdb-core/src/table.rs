//! The canonical in-memory task table.
//!
//! [`TaskTable`] owns the ordered task rows and guarantees the schema
//! invariants across arbitrary input and every mutation:
//!
//! 1. Every row has exactly the five fields of [`Field::ALL`], in that order.
//! 2. Every status is one of the [`TaskStatus`] values.
//! 3. `entry_time` is written once, by [`TaskTable::add_row`] (or carried over
//!    from a loaded file), and never by an edit.
//! 4. Text fields are plain strings; absent values are empty strings.
//!
//! Bulk loading through [`TaskTable::normalize`] is total and coerces
//! garbage. Direct edits are strict and fail with a typed error, leaving the
//! table unchanged.
//!
//! # Examples
//!
//! ```rust
//! use taskdb_core::{Field, TaskStatus, TaskTable};
//!
//! let mut table = TaskTable::create_empty();
//! let row = table.add_row("2025-10-17T09:00:00");
//! table.update_field(row, Field::Title, "Buy milk")?;
//! table.update_field(row, Field::Status, "InProgress")?;
//! table.set_schedule(row, "2025-10-17T17:00:00")?;
//!
//! assert!(table.update_field(row, Field::EntryTime, "now").is_err());
//! assert!(table.update_field(row, Field::Status, "done").is_err());
//! assert_eq!(table[row].status(), TaskStatus::InProgress);
//! # Ok::<(), taskdb_core::TaskDbError>(())
//! ```

use std::ops::Index;

use log::debug;
use serde_json::Value;

use crate::{
    codec::{self, RawRecord},
    error::{Result, TaskDbError},
    models::{Field, Task, TaskStatus, HEADERS},
    timestamp,
};

/// Ordered collection of tasks; insertion order is display and storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTable {
    tasks: Vec<Task>,
}

impl TaskTable {
    /// Returns a table with no rows.
    pub fn create_empty() -> Self {
        Self::default()
    }

    /// Coerces loosely-typed records into a canonical table.
    ///
    /// Never fails. Missing columns become empty text (or `Planned` for the
    /// status), extra columns are dropped, non-text cells are rendered as
    /// text, and any status that is not exactly `Planned`, `InProgress` or
    /// `Done` becomes `Planned`.
    pub fn normalize<I>(raw_rows: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut dropped_columns = 0usize;
        let mut coerced_statuses = 0usize;

        let tasks: Vec<Task> = raw_rows
            .into_iter()
            .map(|record| {
                dropped_columns += record
                    .keys()
                    .filter(|key| !HEADERS.contains(&key.as_str()))
                    .count();

                let text = |field: Field| {
                    record
                        .get(field.header())
                        .map(cell_text)
                        .unwrap_or_default()
                };

                let raw_status = text(Field::Status);
                let status = TaskStatus::coerce(&raw_status);
                if status.as_str() != raw_status {
                    coerced_statuses += 1;
                }

                Task::from_parts(
                    text(Field::EntryTime),
                    text(Field::Title),
                    text(Field::Detail),
                    text(Field::ScheduleTime),
                    status,
                )
            })
            .collect();

        if dropped_columns > 0 || coerced_statuses > 0 {
            debug!(
                "Normalized {} rows: dropped {} extra cells, coerced {} statuses to Planned",
                tasks.len(),
                dropped_columns,
                coerced_statuses
            );
        }

        Self { tasks }
    }

    /// Appends a new task stamped with `now` and returns its index.
    ///
    /// `now` must be a non-blank timestamp: this is the only place an entry
    /// time is written.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `now` is blank
    pub fn add_row(&mut self, now: impl Into<String>) -> usize {
        let now = now.into();
        debug_assert!(!now.trim().is_empty(), "entry time must not be blank");
        self.tasks.push(Task::new(now));
        self.tasks.len() - 1
    }

    /// Appends a new task stamped with the current local time.
    pub fn add_row_now(&mut self) -> usize {
        self.add_row(timestamp::now())
    }

    /// Edits one field of one row in place.
    ///
    /// # Errors
    ///
    /// * `TaskDbError::OutOfRange` - `row_index` is not a current row
    /// * `TaskDbError::ImmutableField` - `field` is `entry_time`
    /// * `TaskDbError::InvalidStatus` - status text is not an exact literal
    /// * `TaskDbError::InvalidTimestamp` - schedule text is neither empty
    ///   nor a date-time
    pub fn update_field(&mut self, row_index: usize, field: Field, value: &str) -> Result<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(row_index)
            .ok_or(TaskDbError::OutOfRange {
                index: row_index,
                len,
            })?;

        match field {
            Field::EntryTime => {
                return Err(TaskDbError::ImmutableField {
                    field: Field::EntryTime.name(),
                })
            }
            Field::Title => task.set_title(value.to_string()),
            Field::Detail => task.set_detail(value.to_string()),
            Field::ScheduleTime => task.set_schedule_time(canonical_schedule(value)?),
            Field::Status => {
                let status = value
                    .parse::<TaskStatus>()
                    .map_err(|_| TaskDbError::InvalidStatus {
                        value: value.to_string(),
                    })?;
                task.set_status(status);
            }
        }
        Ok(())
    }

    /// Sets or clears (with `""`) the schedule of one row.
    ///
    /// Same contract as `update_field(row_index, Field::ScheduleTime, ..)`.
    pub fn set_schedule(&mut self, row_index: usize, timestamp: &str) -> Result<()> {
        self.update_field(row_index, Field::ScheduleTime, timestamp)
    }

    /// Removes every row for which `predicate(original_index, task)` is true
    /// and returns the new row count. Survivors keep their relative order
    /// and content.
    pub fn remove_rows<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(usize, &Task) -> bool,
    {
        let mut index = 0;
        self.tasks.retain(|task| {
            let remove = predicate(index, task);
            index += 1;
            !remove
        });
        self.tasks.len()
    }

    /// Writes the canonical task file.
    ///
    /// `TaskTable::normalize` applied to the parsed output gives back a table
    /// equal to `self`.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        codec::write_table(self)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl Index<usize> for TaskTable {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tasks[index]
    }
}

impl<'a> IntoIterator for &'a TaskTable {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Renders any cell as text. Null is empty; strings are taken verbatim.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn canonical_schedule(value: &str) -> Result<String> {
    if value.is_empty() {
        return Ok(String::new());
    }
    timestamp::parse(value)
        .map(timestamp::canonical)
        .ok_or_else(|| TaskDbError::InvalidTimestamp {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const NOW: &str = "2025-10-17T09:00:00";

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn table_with_rows(n: usize) -> TaskTable {
        let mut table = TaskTable::create_empty();
        for i in 0..n {
            let row = table.add_row(format!("2025-10-17T09:0{i}:00"));
            table
                .update_field(row, Field::Title, &format!("Task {i}"))
                .expect("Failed to set title");
        }
        table
    }

    #[test]
    fn test_create_empty_has_no_rows() {
        let table = TaskTable::create_empty();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table, TaskTable::default());
    }

    #[test]
    fn test_add_row_appends_with_defaults() {
        let mut table = table_with_rows(2);
        let before: Vec<Task> = table.tasks().to_vec();

        let row = table.add_row(NOW);

        assert_eq!(row, 2);
        assert_eq!(table.len(), 3);
        assert_eq!(&table.tasks()[..2], before.as_slice());
        let task = &table[row];
        assert_eq!(task.entry_time(), NOW);
        assert_eq!(task.title(), "");
        assert_eq!(task.detail(), "");
        assert_eq!(task.schedule_time(), "");
        assert_eq!(task.status(), TaskStatus::Planned);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "entry time must not be blank")]
    fn test_add_row_rejects_blank_entry_time() {
        let mut table = TaskTable::create_empty();
        table.add_row("  ");
    }

    #[test]
    fn test_add_row_now_stamps_current_time() {
        let mut table = TaskTable::create_empty();
        let row = table.add_row_now();
        assert!(timestamp::parse(table[row].entry_time()).is_some());
    }

    #[test]
    fn test_update_field_text_values() {
        let mut table = table_with_rows(1);
        table
            .update_field(0, Field::Title, "Renew passport")
            .expect("Failed to update title");
        table
            .update_field(0, Field::Detail, "Photos,\nform \"B\"")
            .expect("Failed to update detail");

        assert_eq!(table[0].title(), "Renew passport");
        assert_eq!(table[0].detail(), "Photos,\nform \"B\"");
    }

    #[test]
    fn test_update_field_out_of_range() {
        let mut table = table_with_rows(2);
        let err = table.update_field(2, Field::Title, "x").unwrap_err();
        assert!(matches!(err, TaskDbError::OutOfRange { index: 2, len: 2 }));

        // Index is checked before the field
        let err = table.update_field(9, Field::EntryTime, "x").unwrap_err();
        assert!(matches!(err, TaskDbError::OutOfRange { .. }));
    }

    #[test]
    fn test_entry_time_is_immutable_for_every_row() {
        let mut table = table_with_rows(3);
        let before = table.clone();
        for i in 0..table.len() {
            for value in ["", NOW, "anything"] {
                let err = table.update_field(i, Field::EntryTime, value).unwrap_err();
                assert!(matches!(err, TaskDbError::ImmutableField { field: "entry_time" }));
            }
        }
        assert_eq!(table, before);
    }

    #[test]
    fn test_update_status_rejects_what_normalize_coerces() {
        let mut table = table_with_rows(1);
        for bad in ["done", "In Progress", "Blocked", ""] {
            let err = table.update_field(0, Field::Status, bad).unwrap_err();
            assert!(matches!(err, TaskDbError::InvalidStatus { ref value } if value == bad));
        }
        assert_eq!(table[0].status(), TaskStatus::Planned);

        table
            .update_field(0, Field::Status, "Done")
            .expect("Failed to set status");
        assert_eq!(table[0].status(), TaskStatus::Done);
    }

    #[test]
    fn test_set_schedule_accepts_empty_or_timestamp() {
        let mut table = table_with_rows(1);
        table
            .set_schedule(0, "2025-10-17T17:00:00")
            .expect("Failed to set schedule");
        assert_eq!(table[0].schedule_time(), "2025-10-17T17:00:00");

        table
            .set_schedule(0, "2025-10-18 08:30")
            .expect("Failed to set schedule");
        assert_eq!(table[0].schedule_time(), "2025-10-18T08:30:00");

        table
            .set_schedule(0, "2025-10-19T06:15:00Z")
            .expect("Failed to set UTC schedule");
        assert_eq!(table[0].schedule_time(), "2025-10-19T06:15:00");

        table.set_schedule(0, "").expect("Failed to clear schedule");
        assert_eq!(table[0].schedule_time(), "");
        assert!(!table[0].is_scheduled());
    }

    #[test]
    fn test_set_schedule_rejects_garbage() {
        let mut table = table_with_rows(1);
        table
            .set_schedule(0, "2025-10-17T17:00:00")
            .expect("Failed to set schedule");

        let err = table.set_schedule(0, "next friday").unwrap_err();
        assert!(matches!(err, TaskDbError::InvalidTimestamp { .. }));
        assert_eq!(table[0].schedule_time(), "2025-10-17T17:00:00");

        let err = table.set_schedule(5, "").unwrap_err();
        assert!(matches!(err, TaskDbError::OutOfRange { .. }));
    }

    #[test]
    fn test_remove_rows_preserves_order() {
        let mut table = table_with_rows(4);
        let survivors = vec![table[0].clone(), table[2].clone()];

        let remaining = table.remove_rows(|i, _| i == 1 || i == 3);

        assert_eq!(remaining, 2);
        assert_eq!(table.tasks(), survivors.as_slice());
    }

    #[test]
    fn test_remove_rows_by_content() {
        let mut table = table_with_rows(3);
        table
            .update_field(1, Field::Status, "Done")
            .expect("Failed to set status");

        let remaining = table.remove_rows(|_, task| task.status() == TaskStatus::Done);

        assert_eq!(remaining, 2);
        assert_eq!(table[0].title(), "Task 0");
        assert_eq!(table[1].title(), "Task 2");
    }

    #[test]
    fn test_remove_rows_nothing_matches() {
        let mut table = table_with_rows(2);
        let before = table.clone();
        assert_eq!(table.remove_rows(|_, _| false), 2);
        assert_eq!(table, before);
    }

    #[test]
    fn test_normalize_missing_columns() {
        let table = TaskTable::normalize(vec![record(json!({ "Title / Description": "Only a title" }))]);

        assert_eq!(table.len(), 1);
        let task = &table[0];
        assert_eq!(task.entry_time(), "");
        assert_eq!(task.title(), "Only a title");
        assert_eq!(task.detail(), "");
        assert_eq!(task.schedule_time(), "");
        assert_eq!(task.status(), TaskStatus::Planned);
    }

    #[test]
    fn test_normalize_drops_extra_columns_and_reorders() {
        let table = TaskTable::normalize(vec![record(json!({
            "Status": "Done",
            "_delete": true,
            "Priority": "high",
            "Schedule": "2025-10-17T17:00:00",
            "Task": "notes",
            "Entry": NOW,
            "Title / Description": "title",
        }))]);

        let expected = Task::from_parts(
            NOW.to_string(),
            "title".to_string(),
            "notes".to_string(),
            "2025-10-17T17:00:00".to_string(),
            TaskStatus::Done,
        );
        assert_eq!(table.tasks(), [expected]);
        assert!(!String::from_utf8(table.serialize().unwrap()).unwrap().contains("Priority"));
    }

    #[test]
    fn test_normalize_coerces_garbage_status() {
        let rows = ["Planned", "InProgress", "Done", "done", "In Progress", "Blocked", ""]
            .into_iter()
            .map(|s| record(json!({ "Status": s })))
            .collect::<Vec<_>>();
        let mut statuses = TaskTable::normalize(rows)
            .iter()
            .map(Task::status)
            .collect::<Vec<_>>();

        assert_eq!(
            statuses.drain(..3).collect::<Vec<_>>(),
            [TaskStatus::Planned, TaskStatus::InProgress, TaskStatus::Done]
        );
        assert!(statuses.iter().all(|s| *s == TaskStatus::Planned));
    }

    #[test]
    fn test_normalize_non_text_cells() {
        let table = TaskTable::normalize(vec![record(json!({
            "Entry": 20251017,
            "Title / Description": 3.5,
            "Task": ["a", 1],
            "Schedule": null,
            "Status": false,
        }))]);

        let task = &table[0];
        assert_eq!(task.entry_time(), "20251017");
        assert_eq!(task.title(), "3.5");
        assert_eq!(task.detail(), "[\"a\",1]");
        assert_eq!(task.schedule_time(), "");
        assert_eq!(task.status(), TaskStatus::Planned);
    }

    #[test]
    fn test_normalize_keeps_unparseable_schedule_text() {
        let table = TaskTable::normalize(vec![record(json!({ "Schedule": "whenever" }))]);
        assert_eq!(table[0].schedule_time(), "whenever");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(TaskTable::normalize(Vec::new()), TaskTable::create_empty());
    }

    #[test]
    fn test_iteration_and_indexing_agree() {
        let table = table_with_rows(3);
        let titles: Vec<&str> = (&table).into_iter().map(Task::title).collect();
        assert_eq!(titles, ["Task 0", "Task 1", "Task 2"]);
        assert_eq!(table.get(1), Some(&table[1]));
        assert!(table.get(3).is_none());
    }
}
