use crate::core::io::{TableIoError, UnsupportedFormatError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error("Stratification column '{column}' not found in the dataset")]
    MissingColumn { column: String },

    #[error("Dataset is empty after filtering; nothing to split")]
    EmptyDataset,

    #[error("Failed to read dataset '{path}': {source}", path = .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: TableIoError,
    },

    #[error("Failed to write partition '{path}': {source}", path = .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: TableIoError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
