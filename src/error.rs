//! Error types for task store operations.
//!
//! [`TaskError`] is the error surfaced by every fallible [`TaskStore`]
//! operation. Storage-layer failures are wrapped via
//! [`StorageError`](crate::store::backend::StorageError) so that callers
//! can distinguish domain problems (bad input, unknown id) from I/O
//! problems and decide which to surface to the user.
//!
//! [`TaskStore`]: crate::store::TaskStore

use thiserror::Error;

use crate::store::backend::StorageError;

/// Errors that can occur during task store operations.
///
/// # Examples
///
/// ```
/// use taskpad::TaskError;
///
/// let err = TaskError::NotFound { id: 42 };
/// assert_eq!(err.to_string(), "task not found: 42");
/// ```
#[derive(Error, Debug)]
pub enum TaskError {
    /// A task title was empty (or whitespace-only) after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// No task with the given identifier exists in the store.
    #[error("task not found: {id}")]
    NotFound {
        /// The identifier that was not found.
        id: u64,
    },

    /// The storage backend failed to load or persist the collection.
    ///
    /// The in-memory state is still consistent when this is returned from
    /// a mutation; only durability is in question.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
