//! Error types for checklist ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a dataset load.
///
/// Rows rejected by the normalizer are not errors; they are counted in
/// [`crate::Dataset::dropped_rows`].
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Dataset file not found.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Network Errors ===
    /// HTTP request could not be completed.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // === Parsing Errors ===
    /// Delimited text could not be parsed.
    #[error("failed to parse {origin}: {source}")]
    CsvParse {
        origin: String,
        #[source]
        source: csv::Error,
    },

    /// Source has no header row.
    #[error("dataset is empty: {origin}")]
    EmptySource { origin: String },

    /// Delimiter is not a single ASCII character.
    #[error("invalid delimiter '{0}': expected a single ASCII character")]
    InvalidDelimiter(String),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/checklist.csv"),
        };
        assert_eq!(err.to_string(), "dataset file not found: /data/checklist.csv");

        let err = IngestError::HttpStatus {
            url: "https://example.org/checklist.csv".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "fetching https://example.org/checklist.csv returned HTTP 404"
        );
    }
}
