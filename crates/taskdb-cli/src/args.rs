//! Command-line interface definitions using clap.
//!
//! Each invocation is one editing session: the task file is loaded, at most
//! one edit event is applied, and the file is written back only if the edit
//! succeeded. Rows are numbered from 1, as in the table preview.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::{Date, Time};

/// Personal task database kept in a portable CSV file
///
/// TaskDB records tasks with an automatic entry time, a title, notes, an
/// optional schedule and a status (Planned, InProgress, Done). All data stays
/// in the one CSV file.
#[derive(Parser)]
#[command(version, about, name = "taskdb")]
pub struct Args {
    /// Path to the task file. Defaults to
    /// $XDG_DATA_HOME/taskdb/taskdb_tasks.csv
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the TaskDB CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show every task in table order
    #[command(aliases = ["l", "ls"])]
    List,
    /// Create a new blank task file
    New(NewFileArgs),
    /// Add a task stamped with the current time
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Edit the title, notes or status of a task
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Set or clear the schedule of a task
    #[command(alias = "sc")]
    Schedule(ScheduleArgs),
    /// Show one task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Remove tasks
    #[command(aliases = ["rm", "d"])]
    Remove(RemoveTasksArgs),
    /// Write the canonical task file to stdout or to another path
    Export(ExportArgs),
    /// Replace the task file with the contents of another file
    Import(ImportArgs),
}

/// Create a new blank task file
#[derive(ClapArgs)]
pub struct NewFileArgs {
    /// Overwrite the task file if it already exists
    #[arg(long)]
    pub force: bool,
}

/// Add a task
///
/// The entry time is set automatically and can never be edited afterwards.
#[derive(ClapArgs)]
pub struct AddTaskArgs {
    /// Short title of the task
    #[arg(short, long)]
    pub title: Option<String>,
    /// Detailed notes or subtasks
    #[arg(short, long)]
    pub detail: Option<String>,
    /// Initial status: Planned, InProgress or Done (exact spelling)
    #[arg(short, long)]
    pub status: Option<String>,
}

/// Edit a task
///
/// Every supplied option is applied in order; if any of them is rejected the
/// file is left as it was.
#[derive(ClapArgs)]
pub struct EditTaskArgs {
    #[arg(help = "Row number of the task to edit (1 = first row)")]
    pub row: NonZeroUsize,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New notes
    #[arg(short, long)]
    pub detail: Option<String>,
    /// New status: Planned, InProgress or Done (exact spelling)
    #[arg(short, long)]
    pub status: Option<String>,
}

impl EditTaskArgs {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.detail.is_none() && self.status.is_none()
    }
}

/// Set or clear the schedule of a task
///
/// Date defaults to today and time to the current time with seconds zeroed.
#[derive(ClapArgs)]
pub struct ScheduleArgs {
    #[arg(help = "Row number of the task to schedule (1 = first row)")]
    pub row: NonZeroUsize,
    /// Calendar date, YYYY-MM-DD
    #[arg(long, conflicts_with = "clear")]
    pub date: Option<Date>,
    /// Time of day, HH:MM
    #[arg(long, conflicts_with = "clear")]
    pub time: Option<Time>,
    /// Remove the schedule instead of setting one
    #[arg(long)]
    pub clear: bool,
}

/// Show one task
#[derive(ClapArgs)]
pub struct ShowTaskArgs {
    #[arg(help = "Row number of the task to show (1 = first row)")]
    pub row: NonZeroUsize,
}

/// Remove tasks
///
/// The listed rows are marked and then removed together; the remaining rows
/// keep their order.
#[derive(ClapArgs)]
pub struct RemoveTasksArgs {
    #[arg(required = true, help = "Row numbers of the tasks to remove")]
    pub rows: Vec<NonZeroUsize>,
}

/// Write the canonical task file
#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Save under this path instead of printing to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Replace the task file with another file's tasks
#[derive(ClapArgs)]
pub struct ImportArgs {
    /// CSV file to read; it is normalized before being saved
    pub source: PathBuf,
}

/// Converts a 1-based row number into a table index.
pub fn row_index(row: NonZeroUsize) -> usize {
    row.get() - 1
}
