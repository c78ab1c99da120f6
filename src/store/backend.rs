//! Storage backend trait and low-level storage errors.
//!
//! The [`StorageBackend`] trait defines the contract storage engines
//! implement: two whole-collection operations, [`load`](StorageBackend::load)
//! and [`save`](StorageBackend::save). There is no incremental persistence;
//! every save replaces the prior contents entirely.
//!
//! Domain logic (id assignment, title validation, completion invariants,
//! queries) does **not** belong here. Backends are dumb collection
//! readers/writers; domain logic lives in
//! [`TaskStore`](crate::store::TaskStore).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Task;

/// Errors that can occur during raw storage operations.
///
/// Each variant carries the path (or record id) involved and keeps the
/// underlying error reachable through [`std::error::Error::source()`].
///
/// # Examples
///
/// ```
/// use taskpad::StorageError;
///
/// let err = StorageError::Read {
///     path: "data/tasks.jsonl".into(),
///     source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
/// };
/// assert!(err.to_string().contains("data/tasks.jsonl"));
/// ```
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage directory could not be created.
    #[error("failed to create storage directory {path}")]
    Create {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The storage file could not be written.
    #[error("failed to write storage file {path}")]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The storage file exists but could not be read.
    #[error("failed to read storage file {path}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A record could not be encoded for storage.
    #[error("failed to encode task {id} for storage")]
    Encode {
        /// The id of the record that failed to encode.
        id: u64,
        /// The underlying encoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// Whole-collection storage for task records.
///
/// Implementations provide durable (or deliberately non-durable) storage
/// of the full task collection. The [`TaskStore`](crate::store::TaskStore)
/// calls [`save`](StorageBackend::save) after every mutation and
/// [`load`](StorageBackend::load) once at startup.
pub trait StorageBackend {
    /// Reads the full collection.
    ///
    /// A backend whose underlying resource does not exist yet returns an
    /// empty collection, not an error. Individually unreadable records may
    /// be skipped (backends log them); only failures that prevent reading
    /// the resource as a whole are errors.
    ///
    /// # Errors
    ///
    /// - [`StorageError::Read`] if the resource exists but cannot be read.
    fn load(&self) -> Result<Vec<Task>, StorageError>;

    /// Replaces the stored collection with `tasks`, in order.
    ///
    /// Creates the containing storage location if absent.
    ///
    /// # Errors
    ///
    /// - [`StorageError::Create`] if the storage location cannot be created.
    /// - [`StorageError::Encode`] if a record cannot be serialized.
    /// - [`StorageError::Write`] if the resource cannot be written.
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}
