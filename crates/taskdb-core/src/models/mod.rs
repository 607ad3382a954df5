//! Data models for tasks.
//!
//! This module contains the domain types of the task table: the [`Task`] row,
//! the [`TaskStatus`] enumeration and the [`Field`] schema. Display
//! implementations for these models live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use taskdb_core::models::{Field, TaskStatus};
//!
//! assert_eq!(Field::ScheduleTime.header(), "Schedule");
//! assert_eq!("schedule_time".parse::<Field>().unwrap(), Field::ScheduleTime);
//! assert_eq!(TaskStatus::coerce("done"), TaskStatus::Planned);
//! assert_eq!(TaskStatus::coerce("Done"), TaskStatus::Done);
//! ```

pub mod field;
pub mod status;
pub mod task;


pub use field::{Field, HEADERS};
pub use status::TaskStatus;
pub use task::Task;
