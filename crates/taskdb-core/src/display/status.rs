//! Confirmation messages for file-level operations.

use std::{fmt, path::Path};

/// Outcome of an operation that acts on the task file as a whole rather than
/// on one task.
pub enum OperationStatus<'a> {
    /// A blank task file was written
    Created { path: &'a Path },
    /// The table was saved under another name
    Saved { tasks: usize, file_name: &'a str },
    /// Another file's tasks replaced the table
    Loaded {
        file_name: &'a str,
        tasks: usize,
        target: &'a Path,
    },
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "task"
    } else {
        "tasks"
    }
}

impl fmt::Display for OperationStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { path } => {
                writeln!(f, "Created blank task file {}", path.display())
            }
            Self::Saved { tasks, file_name } => {
                writeln!(f, "Saved {tasks} {} as {file_name}", plural(*tasks))
            }
            Self::Loaded {
                file_name,
                tasks,
                target,
            } => writeln!(
                f,
                "Loaded {file_name} ({tasks} {}) into {}",
                plural(*tasks),
                target.display()
            ),
        }
    }
}
