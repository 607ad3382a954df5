//! Transient per-row deletion marks.
//!
//! Marks live beside the table, never inside it, so nothing about them can
//! reach the task file. They are keyed by row index and are only meaningful
//! for the table they were set against.

use std::collections::BTreeSet;

/// Set of row indices ticked for deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMarks {
    rows: BTreeSet<usize>,
}

impl RowMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks a row. Returns false if it was already ticked.
    pub fn mark(&mut self, row: usize) -> bool {
        self.rows.insert(row)
    }

    /// Unticks a row. Returns false if it was not ticked.
    pub fn unmark(&mut self, row: usize) -> bool {
        self.rows.remove(&row)
    }

    pub fn is_marked(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Marked rows in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }
}
