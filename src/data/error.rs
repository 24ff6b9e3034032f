use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("Malformed line {line} in {table}: {reason}")]
    MalformedLine {
        table: &'static str,
        line: usize,
        reason: String
    },

    #[error("Failed to parse save export: {0}")]
    Save(#[from] serde_json::Error),

    #[error("Failed to serialize report: {0}")]
    Report(#[source] serde_json::Error)
}

impl DataError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> DataError {
        DataError::Io {
            path: path.into(),
            source
        }
    }
}
