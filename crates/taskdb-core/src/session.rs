//! The editing session that owns the task table.
//!
//! A [`Session`] is the single owner of the in-memory [`TaskTable`] together
//! with the state that surrounds it while a person edits: the file name the
//! table will be saved under and the transient deletion marks. The host
//! application creates one and passes it around; there is no global table.
//!
//! Loading is all-or-nothing. If the bytes cannot be parsed the session is
//! left exactly as it was.
//!
//! # Examples
//!
//! ```rust
//! use taskdb_core::{Field, RemoveOutcome, Session};
//!
//! let mut session = Session::new();
//! let row = session.table_mut().add_row("2025-10-17T09:00:00");
//! session.table_mut().update_field(row, Field::Title, "Water plants")?;
//! session.table_mut().add_row("2025-10-17T09:05:00");
//!
//! session.mark(1)?;
//! assert_eq!(session.remove_marked(), RemoveOutcome::Removed { removed: 1, remaining: 1 });
//!
//! let bytes = session.save()?;
//! let mut other = Session::new();
//! other.load("copy.csv", &bytes)?;
//! assert_eq!(other.table(), session.table());
//! # Ok::<(), taskdb_core::TaskDbError>(())
//! ```

use std::ops::Deref;

use log::debug;

use crate::{
    codec,
    error::{Result, TaskDbError},
    marks::RowMarks,
    models::{Field, Task},
    table::TaskTable,
};

/// File name used for a blank session.
pub const DEFAULT_FILE_NAME: &str = "taskdb_tasks.csv";

/// What `remove_marked` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No row was marked; the table is unchanged
    NothingMarked,
    /// Marked rows were removed
    Removed { removed: usize, remaining: usize },
}

/// One editing session over one task table.
#[derive(Debug, Clone)]
pub struct Session {
    table: TaskTable,
    file_name: String,
    marks: RowMarks,
}

impl Session {
    /// Starts with an empty table and the default file name.
    pub fn new() -> Self {
        Self {
            table: TaskTable::create_empty(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            marks: RowMarks::new(),
        }
    }

    /// Replaces the table with the contents of `bytes`.
    ///
    /// # Errors
    ///
    /// * `TaskDbError::FileParse` - the bytes are not a readable task file;
    ///   the table, file name and marks are untouched
    pub fn load(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        let table = codec::load_table(bytes)?;
        debug!("Loaded {} tasks from {}", table.len(), file_name);
        self.table = table;
        self.file_name = file_name.to_string();
        self.marks.clear();
        Ok(())
    }

    /// Encodes the current table. Does not change the session.
    pub fn save(&self) -> Result<Vec<u8>> {
        self.table.serialize()
    }

    /// Starts over with a blank table under the default file name.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Sets the name the table will be saved under. Blank names are ignored.
    pub fn rename(&mut self, file_name: &str) -> bool {
        let trimmed = file_name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.file_name = trimmed.to_string();
        true
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn table(&self) -> &TaskTable {
        &self.table
    }

    /// Mutable access for edit events.
    ///
    /// Appends and in-place edits keep the marks; removing rows through the
    /// returned handle clears them, since they are keyed by row index.
    pub fn table_mut(&mut self) -> TableEdit<'_> {
        TableEdit {
            table: &mut self.table,
            marks: &mut self.marks,
        }
    }

    pub fn marks(&self) -> &RowMarks {
        &self.marks
    }

    /// Ticks a row for deletion.
    ///
    /// # Errors
    ///
    /// * `TaskDbError::OutOfRange` - `row` is not a current row
    pub fn mark(&mut self, row: usize) -> Result<()> {
        self.check_row(row)?;
        self.marks.mark(row);
        Ok(())
    }

    /// Unticks a row.
    pub fn unmark(&mut self, row: usize) {
        self.marks.unmark(row);
    }

    pub fn is_marked(&self, row: usize) -> bool {
        self.marks.is_marked(row)
    }

    /// Removes every ticked row and clears the marks.
    pub fn remove_marked(&mut self) -> RemoveOutcome {
        if self.marks.is_empty() {
            return RemoveOutcome::NothingMarked;
        }
        let before = self.table.len();
        let marks = std::mem::take(&mut self.marks);
        let remaining = self.table.remove_rows(|i, _| marks.is_marked(i));
        debug!("Removed {} marked rows", before - remaining);
        RemoveOutcome::Removed {
            removed: before - remaining,
            remaining,
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row < self.table.len() {
            Ok(())
        } else {
            Err(TaskDbError::OutOfRange {
                index: row,
                len: self.table.len(),
            })
        }
    }
}

/// Edit handle over a session's table, returned by [`Session::table_mut`].
///
/// Reads go straight to the [`TaskTable`]; the mutators mirror its own.
pub struct TableEdit<'a> {
    table: &'a mut TaskTable,
    marks: &'a mut RowMarks,
}

impl TableEdit<'_> {
    /// See [`TaskTable::add_row`].
    pub fn add_row(&mut self, now: impl Into<String>) -> usize {
        self.table.add_row(now)
    }

    /// See [`TaskTable::add_row_now`].
    pub fn add_row_now(&mut self) -> usize {
        self.table.add_row_now()
    }

    /// See [`TaskTable::update_field`].
    pub fn update_field(&mut self, row_index: usize, field: Field, value: &str) -> Result<()> {
        self.table.update_field(row_index, field, value)
    }

    /// See [`TaskTable::set_schedule`].
    pub fn set_schedule(&mut self, row_index: usize, timestamp: &str) -> Result<()> {
        self.table.set_schedule(row_index, timestamp)
    }

    /// See [`TaskTable::remove_rows`]. Clears every deletion mark.
    pub fn remove_rows<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(usize, &Task) -> bool,
    {
        if !self.marks.is_empty() {
            debug!("Clearing {} marks before removing rows", self.marks.len());
            self.marks.clear();
        }
        self.table.remove_rows(predicate)
    }
}

impl Deref for TableEdit<'_> {
    type Target = TaskTable;

    fn deref(&self) -> &Self::Target {
        self.table
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
