//! Column schema of the task table.

use std::{fmt, str::FromStr};

use crate::error::TaskDbError;

/// One of the five logical fields of a task, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EntryTime,
    Title,
    Detail,
    ScheduleTime,
    Status,
}

impl Field {
    /// Canonical column order.
    pub const ALL: [Field; 5] = [
        Field::EntryTime,
        Field::Title,
        Field::Detail,
        Field::ScheduleTime,
        Field::Status,
    ];

    /// Logical name used by edit events.
    pub fn name(&self) -> &'static str {
        match self {
            Field::EntryTime => "entry_time",
            Field::Title => "title",
            Field::Detail => "detail",
            Field::ScheduleTime => "schedule_time",
            Field::Status => "status",
        }
    }

    /// Column header in the task file.
    pub fn header(&self) -> &'static str {
        match self {
            Field::EntryTime => "Entry",
            Field::Title => "Title / Description",
            Field::Detail => "Task",
            Field::ScheduleTime => "Schedule",
            Field::Status => "Status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = TaskDbError;

    /// Accepts either the logical name or the column header.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s || field.header() == s)
            .ok_or_else(|| TaskDbError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// Header record of the task file, in canonical order.
pub const HEADERS: [&str; 5] = [
    "Entry",
    "Title / Description",
    "Task",
    "Schedule",
    "Status",
];
