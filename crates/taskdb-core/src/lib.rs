//! Core library for the TaskDB personal task database.
//!
//! This crate holds everything about a task file that can be got wrong
//! silently: the fixed five-column schema, the tolerant normalization of
//! hand-edited CSV, the strict field edits, the canonical writer, and the
//! friendly rendering of stored timestamps.
//!
//! # Architecture
//!
//! ```text
//! bytes ──parse_records──▶ RawRecord ──normalize──▶ TaskTable ──serialize──▶ bytes
//!                                                      │
//!                                          add_row / update_field /
//!                                          set_schedule / remove_rows
//! ```
//!
//! - [`codec`]: CSV bytes to loose records and back
//! - [`table`]: the canonical [`TaskTable`]
//! - [`timestamp`]: stored timestamp text to display text
//! - [`session`]: the owned editing [`Session`] (table, file name, marks)
//! - [`display`]: markdown rendering for terminals
//!
//! # Quick Start
//!
//! ```rust
//! use taskdb_core::{display::Tasks, timestamp, Field, Session};
//!
//! let mut session = Session::new();
//! session.load("tasks.csv", b"Entry,Title / Description,Status\n2025-10-17T09:00:00,Plan trip,Someday\n")?;
//!
//! let mut table = session.table_mut();
//! assert_eq!(table[0].status().as_str(), "Planned");
//! table.set_schedule(0, "2025-10-17T17:00:00")?;
//!
//! let row = table.add_row(timestamp::now());
//! table.update_field(row, Field::Title, "Pack bags")?;
//!
//! println!("{}", Tasks(session.table()));
//! let bytes = session.save()?;
//! assert!(bytes.starts_with(b"Entry,Title / Description,Task,Schedule,Status\n"));
//! # Ok::<(), taskdb_core::TaskDbError>(())
//! ```

pub mod codec;
pub mod display;
pub mod error;
pub mod marks;
pub mod models;
pub mod session;
pub mod table;
pub mod timestamp;

// Re-export commonly used types
pub use codec::RawRecord;
pub use display::{CreateResult, DeleteResult, FriendlyTime, OperationStatus, Tasks, UpdateResult};
pub use error::{Result, TaskDbError};
pub use marks::RowMarks;
pub use models::{Field, Task, TaskStatus, HEADERS};
pub use session::{RemoveOutcome, Session, TableEdit, DEFAULT_FILE_NAME};
pub use table::TaskTable;
