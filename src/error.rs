//! Error types for clitodo
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad id, missing setup, empty description)
//! - 4: Operation failed (storage I/O, corrupt data, lock contention)

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::todo::Todo;

/// Exit codes for the clitodo CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for clitodo operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Config file not found at {0}")]
    NotInitialized(PathBuf),

    #[error("Database not found at {0}")]
    StorageNotFound(PathBuf),

    #[error("Invalid to-do id {id} (list has {len} items)")]
    InvalidId { id: usize, len: usize },

    #[error("Invalid priority {0} (expected 1, 2 or 3)")]
    InvalidPriority(u8),

    #[error("To-do description cannot be empty")]
    EmptyDescription,

    #[error("Invalid configuration in {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // Operation failures (exit code 4)
    #[error("Config directory error at {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config file error at {path}: {source}")]
    FileError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Database read error at {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Database write error at {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Database at {path} is corrupt: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Lock acquisition failed: {0}")]
    LockFailed(PathBuf),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::NotInitialized(_)
            | Error::StorageNotFound(_)
            | Error::InvalidId { .. }
            | Error::InvalidPriority(_)
            | Error::EmptyDescription
            | Error::ConfigInvalid { .. } => exit_codes::USER_ERROR,

            // Operation failures
            Error::DirectoryError { .. }
            | Error::FileError { .. }
            | Error::ReadError { .. }
            | Error::WriteError { .. }
            | Error::ParseError { .. }
            | Error::LockFailed(_)
            | Error::Prompt(_)
            | Error::Io(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Short machine-readable name for this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotInitialized(_) => "not_initialized",
            Error::StorageNotFound(_) => "storage_not_found",
            Error::InvalidId { .. } => "invalid_id",
            Error::InvalidPriority(_) => "invalid_priority",
            Error::EmptyDescription => "empty_description",
            Error::ConfigInvalid { .. } => "config_invalid",
            Error::DirectoryError { .. } => "directory_error",
            Error::FileError { .. } => "file_error",
            Error::ReadError { .. } => "read_error",
            Error::WriteError { .. } => "write_error",
            Error::ParseError { .. } => "parse_error",
            Error::LockFailed(_) => "lock_failed",
            Error::Prompt(_) => "prompt_failed",
            Error::Io(_) => "io_error",
        }
    }

    /// Structured details for JSON output
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::InvalidId { id, len } => Some(serde_json::json!({
                "id": id,
                "len": len,
            })),
            Error::NotInitialized(path)
            | Error::StorageNotFound(path)
            | Error::LockFailed(path)
            | Error::DirectoryError { path, .. }
            | Error::FileError { path, .. }
            | Error::ReadError { path, .. }
            | Error::WriteError { path, .. }
            | Error::ParseError { path, .. }
            | Error::ConfigInvalid { path, .. } => Some(serde_json::json!({
                "path": path.to_string_lossy(),
            })),
            _ => None,
        }
    }
}

/// Result type alias for clitodo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of `TodoStore::add`
#[derive(Error, Debug)]
pub enum AddError {
    /// The input was rejected before any record was built
    #[error(transparent)]
    Rejected(Error),

    /// The record was built but could not be stored
    #[error("Adding to-do \"{}\" failed: {error}", .todo.description)]
    NotSaved {
        todo: Todo,
        #[source]
        error: Error,
    },
}

impl AddError {
    /// The record that would have been added, if one was built
    pub fn todo(&self) -> Option<&Todo> {
        match self {
            AddError::Rejected(_) => None,
            AddError::NotSaved { todo, .. } => Some(todo),
        }
    }
}

impl From<AddError> for Error {
    fn from(err: AddError) -> Self {
        match err {
            AddError::Rejected(error) | AddError::NotSaved { error, .. } => error,
        }
    }
}

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            kind: err.code(),
            details: err.details(),
        }
    }
}
