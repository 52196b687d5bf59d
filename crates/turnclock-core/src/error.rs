//! Error types for the persistence layer.
//!
//! Both stores are best-effort from the application's point of view: callers
//! log failures and keep running. The variants exist so call sites can tell
//! "the file is in the way" apart from "the disk said no".

use thiserror::Error;

/// Errors from reading or writing the options file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Target file exists and overwrite was not requested
    #[error("options file already exists: {path}")]
    AlreadyExists {
        /// Path that was refused
        path: String,
    },

    /// Options could not be encoded as JSON
    #[error("options encode failed: {0}")]
    Encode(String),

    /// Underlying filesystem failure
    #[error("options i/o failed: {0}")]
    Io(String),
}

/// Errors from the CSV action logbook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogbookError {
    /// Logbook file could not be opened or created
    #[error("logbook open failed: {0}")]
    Open(String),

    /// A row could not be written or flushed
    #[error("logbook write failed: {0}")]
    Write(String),
}
