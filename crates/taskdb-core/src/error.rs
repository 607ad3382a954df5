//! Error types for the task database library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all task database operations.
#[derive(Error, Debug)]
pub enum TaskDbError {
    /// Row index does not exist in the table
    #[error("Row {index} is out of range (table has {len} rows)")]
    OutOfRange { index: usize, len: usize },
    /// Attempt to overwrite a write-once field
    #[error("Field '{field}' is set once at creation and cannot be edited")]
    ImmutableField { field: &'static str },
    /// Direct edit supplied a status outside the enumeration
    #[error("Invalid status '{value}': expected one of Planned, InProgress, Done")]
    InvalidStatus { value: String },
    /// Direct edit supplied a schedule that is not a date-time
    #[error("Invalid timestamp '{value}': expected YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp { value: String },
    /// Field name is not part of the task schema
    #[error("Unknown field '{name}'")]
    UnknownField { name: String },
    /// Raw file bytes could not be decoded into records
    #[error("Could not parse task file: {message}")]
    FileParse {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Writing the canonical table failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Builder for creating file parse errors with optional context.
pub struct FileParseErrorBuilder {
    message: String,
}

impl FileParseErrorBuilder {
    /// Create a new file parse error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: csv::Error) -> TaskDbError {
        TaskDbError::FileParse {
            message: self.message,
            source: Some(source),
        }
    }

    /// Build the error without an underlying CSV error.
    pub fn build(self) -> TaskDbError {
        TaskDbError::FileParse {
            message: self.message,
            source: None,
        }
    }
}

impl TaskDbError {
    /// Creates a builder for file parse errors.
    pub fn file_parse(message: impl Into<String>) -> FileParseErrorBuilder {
        FileParseErrorBuilder::new(message)
    }

    /// Returns true for errors raised by the direct field mutators.
    ///
    /// These are contract violations by the caller; they abort the edit but
    /// never the session.
    pub fn is_edit_error(&self) -> bool {
        matches!(
            self,
            TaskDbError::OutOfRange { .. }
                | TaskDbError::ImmutableField { .. }
                | TaskDbError::InvalidStatus { .. }
                | TaskDbError::InvalidTimestamp { .. }
                | TaskDbError::UnknownField { .. }
        )
    }
}

/// Extension trait for mapping CSV reader results into file parse errors.
pub trait ParseResultExt<T> {
    /// Map CSV errors with a message.
    fn parse_context(self, message: &str) -> Result<T>;
}

impl<T> ParseResultExt<T> for std::result::Result<T, csv::Error> {
    fn parse_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TaskDbError::file_parse(message).with_source(e))
    }
}

/// Extension trait for mapping writer-side failures into serialization
/// errors with context.
pub trait WriteResultExt<T> {
    /// Map any error with a message.
    fn write_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> WriteResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn write_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| TaskDbError::Serialization {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for task database operations
pub type Result<T> = std::result::Result<T, TaskDbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_parse_builder_without_source() {
        let err = TaskDbError::file_parse("No columns to parse from file").build();
        assert_eq!(
            err.to_string(),
            "Could not parse task file: No columns to parse from file"
        );
        assert!(!err.is_edit_error());
    }

    #[test]
    fn test_file_parse_builder_keeps_source_separate() {
        let mut reader = csv::ReaderBuilder::new().from_reader("a,b\n1,2,3\n".as_bytes());
        let csv_err = reader
            .records()
            .next()
            .expect("Failed to read a record")
            .unwrap_err();

        let err = TaskDbError::file_parse("Failed to read record").with_source(csv_err);

        assert_eq!(err.to_string(), "Could not parse task file: Failed to read record");
        let source = std::error::Error::source(&err).expect("Failed to find source");
        assert!(source.to_string().contains("3 fields"));
    }

    #[test]
    fn test_edit_errors_are_classified() {
        assert!(TaskDbError::OutOfRange { index: 3, len: 1 }.is_edit_error());
        assert!(TaskDbError::ImmutableField { field: "entry_time" }.is_edit_error());
        assert!(TaskDbError::InvalidStatus {
            value: "done".to_string()
        }
        .is_edit_error());
        assert!(!TaskDbError::XdgDirectory("no home".to_string()).is_edit_error());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = TaskDbError::OutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Row 4 is out of range (table has 2 rows)");
    }
}
