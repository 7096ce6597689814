//! # Store Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Propagation                               │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error / ParseError                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds the file path and line number      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Exercise binary logs a warning and continues (or, for the school   │
//! │  exercise, ends the run early without a report)                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

use tally_core::error::ParseError;

/// File persistence errors.
///
/// Every variant carries the path of the file involved; load failures
/// never disturb in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("file operation failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but its JSON content does not match the
    /// expected shape.
    #[error("malformed content in '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record line failed to parse; `line` is 1-based.
    #[error("bad record at {path}:{line}: {source}")]
    Record {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
}

impl StoreError {
    /// Wraps an I/O error with the file path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
