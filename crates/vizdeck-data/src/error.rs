use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Malformed table {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Unknown column: {0}")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
