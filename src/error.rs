//! Error types for store, report and export operations.
//!
//! Every variant renders as the message shown to the user, so the command
//! layer can print `err.to_string()` verbatim.

use std::io;
use std::path::{Path, PathBuf};

use rusqlite::ErrorCode;
use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub(crate) enum Error {
    /// A value reached the core in a malformed or out-of-range form.
    #[error("{0}")]
    Validation(String),

    /// A referenced category, expense or budget does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A category with the same name already exists.
    #[error("{0}")]
    Duplicate(String),

    /// The category is still referenced by at least one expense.
    #[error("{0}")]
    ReferentialConflict(String),

    #[error("no expenses to export")]
    EmptyDataset,

    /// A constraint failed inside SQLite without an earlier check catching it.
    #[error("database constraint failed: {0}")]
    StorageIntegrity(String),

    /// Provisioning the data directory or writing an export failed.
    #[error("I/O error on {}: {source}", path.display())]
    FatalIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unexpected database error: {0}")]
    Storage(rusqlite::Error),
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::FatalIo {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(failure, detail)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                let detail = detail.unwrap_or_else(|| failure.to_string());
                tracing::warn!(%detail, "constraint violation reached the store");
                Error::StorageIntegrity(detail)
            }
            other => {
                tracing::error!("unexpected SQL error: {other}");
                Error::Storage(other)
            }
        }
    }
}
