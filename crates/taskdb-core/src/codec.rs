//! CSV encoding of the task file.
//!
//! Reading stops at the loose representation: [`parse_records`] turns raw
//! bytes into [`RawRecord`]s (header name to cell) without interpreting any
//! column, and [`crate::TaskTable::normalize`] takes it from there. Writing
//! goes straight from the canonical table to bytes.
//!
//! The file format is UTF-8 CSV with the header
//! `Entry,Title / Description,Task,Schedule,Status`, `\n` record terminators
//! and quoting only where a field needs it.

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use log::debug;
use serde_json::{Map, Value};

use crate::{
    error::{ParseResultExt, Result, TaskDbError, WriteResultExt},
    models::HEADERS,
    table::TaskTable,
};

/// One loosely-typed input row: column name to cell value.
pub type RawRecord = Map<String, Value>;

/// Decodes task file bytes into loose records.
///
/// Invalid UTF-8 is replaced rather than rejected and a leading byte order
/// mark is ignored. Rows shorter than the header simply lack the trailing
/// columns; when a header name repeats, its first column wins.
///
/// # Errors
///
/// * `TaskDbError::FileParse` - the input has no header record, or a row has
///   more fields than the header
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let decoded = String::from_utf8_lossy(bytes);
    let text = decoded.strip_prefix('\u{feff}').unwrap_or(&decoded);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .parse_context("Failed to read header record")?
        .clone();
    if headers.is_empty() {
        return Err(TaskDbError::file_parse("No columns to parse from file").build());
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.parse_context("Failed to read record")?;
        if row.len() > headers.len() {
            let line = row.position().map_or(0, |p| p.line());
            return Err(TaskDbError::file_parse(format!(
                "Expected {} fields in line {}, saw {}",
                headers.len(),
                line,
                row.len()
            ))
            .build());
        }

        let mut record = RawRecord::new();
        for (name, cell) in headers.iter().zip(row.iter()) {
            if !record.contains_key(name) {
                record.insert(name.to_string(), Value::String(cell.to_string()));
            }
        }
        records.push(record);
    }

    debug!("Parsed {} records with {} columns", records.len(), headers.len());
    Ok(records)
}

/// Parses and normalizes task file bytes in one step.
pub fn load_table(bytes: &[u8]) -> Result<TaskTable> {
    parse_records(bytes).map(TaskTable::normalize)
}

/// Encodes the table as a canonical task file.
pub fn write_table(table: &TaskTable) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(HEADERS)
        .write_context("Failed to write header record")?;
    for task in table {
        writer
            .serialize(task)
            .write_context("Failed to write task record")?;
    }

    let bytes = writer.into_inner().map_err(|e| TaskDbError::Serialization {
        message: format!("Failed to flush task file: {}", e.error()),
    })?;
    debug!("Serialized {} tasks ({} bytes)", table.len(), bytes.len());
    Ok(bytes)
}
