//! Provides input/output functionality for tabular dataset formats.
//!
//! This module contains implementations for reading and writing the flat-file
//! formats materials datasets ship in. It provides a unified trait-based
//! interface for table I/O and an extension-based format dispatcher, so the
//! rest of the crate never needs to know which codec produced a table.

pub mod delimited;
pub mod jsonl;
pub mod traits;

use crate::core::models::table::DataTable;
use delimited::{DelimitedError, DelimitedFile};
use jsonl::{JsonlError, JsonlFile};
use std::path::{Path, PathBuf};
use thiserror::Error;
use traits::TabularFile;

/// The input path's extension names neither of the supported formats.
#[derive(Debug, Error)]
#[error(
    "Unsupported table format for '{path}': expected a .jsonl or .csv extension",
    path = .path.display()
)]
pub struct UnsupportedFormatError {
    pub path: PathBuf,
}

/// Errors produced by the format-dispatching readers and writers.
#[derive(Debug, Error)]
pub enum TableIoError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error(transparent)]
    Jsonl(#[from] JsonlError),

    #[error(transparent)]
    Delimited(#[from] DelimitedError),
}

/// A supported on-disk table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Jsonl,
    Csv,
}

impl TableFormat {
    /// Infers the format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormatError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("jsonl") => Ok(TableFormat::Jsonl),
            Some("csv") => Ok(TableFormat::Csv),
            _ => Err(UnsupportedFormatError {
                path: path.to_path_buf(),
            }),
        }
    }

    /// The canonical file extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Jsonl => "jsonl",
            TableFormat::Csv => "csv",
        }
    }
}

/// Reads a whole table from `path` using the codec for `format`.
pub fn read_table(format: TableFormat, path: &Path) -> Result<DataTable, TableIoError> {
    match format {
        TableFormat::Jsonl => Ok(JsonlFile::read_from_path(path)?),
        TableFormat::Csv => Ok(DelimitedFile::read_from_path(path)?),
    }
}

/// Writes a whole table to `path` using the codec for `format`.
pub fn write_table(table: &DataTable, format: TableFormat, path: &Path) -> Result<(), TableIoError> {
    match format {
        TableFormat::Jsonl => Ok(JsonlFile::write_to_path(table, path)?),
        TableFormat::Csv => Ok(DelimitedFile::write_to_path(table, path)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::value::Value;
    use tempfile::tempdir;

    #[test]
    fn detects_format_from_extension_case_insensitively() {
        assert_eq!(
            TableFormat::from_path(Path::new("data/entries.jsonl")).unwrap(),
            TableFormat::Jsonl
        );
        assert_eq!(
            TableFormat::from_path(Path::new("data/ENTRIES.CSV")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("entries.JsonL")).unwrap(),
            TableFormat::Jsonl
        );
    }

    #[test]
    fn rejects_unknown_or_absent_extensions() {
        for name in ["entries.txt", "entries.json", "entries", "entries.csv.gz"] {
            let result = TableFormat::from_path(Path::new(name));
            assert!(matches!(result, Err(UnsupportedFormatError { .. })), "{name}");
        }
    }

    #[test]
    fn dispatch_round_trips_both_formats() {
        let dir = tempdir().unwrap();
        let mut table = DataTable::new(vec!["id".into(), "x".into()]);
        table.push_row(vec![Value::Integer(1), Value::Float(0.5)]);
        table.push_row(vec![Value::Integer(2), Value::Null]);

        for format in [TableFormat::Jsonl, TableFormat::Csv] {
            let path = dir.path().join(format!("t.{}", format.extension()));
            write_table(&table, format, &path).unwrap();
            let reread = read_table(format, &path).unwrap();
            assert_eq!(reread, table);
        }
    }

    #[test]
    fn read_propagates_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        let result = read_table(TableFormat::Jsonl, &path);
        assert!(matches!(result, Err(TableIoError::Jsonl(JsonlError::Io(_)))));
    }
}
