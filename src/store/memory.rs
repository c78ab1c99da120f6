//! In-memory storage backend.
//!
//! [`InMemoryBackend`] keeps the saved collection in a `parking_lot::Mutex`
//! behind the shared-reference [`StorageBackend`] API. Nothing survives the
//! process; it exists for tests and for callers that want a store without
//! durability.

use parking_lot::Mutex;

use crate::store::backend::{StorageBackend, StorageError};
use crate::types::Task;

/// Storage backend that holds the saved collection in memory.
///
/// # Examples
///
/// ```
/// use taskpad::{InMemoryBackend, StorageBackend};
///
/// let backend = InMemoryBackend::new();
/// assert!(backend.is_empty());
/// assert!(backend.load().unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    data: Mutex<Vec<Task>>,
}

impl InMemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of saved records.
    pub fn len(&self) -> usize {
        self.data.lock().len()
    }

    /// Returns `true` if no collection has been saved (or the last saved
    /// collection was empty).
    pub fn is_empty(&self) -> bool {
        self.data.lock().is_empty()
    }
}

impl StorageBackend for InMemoryBackend {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        Ok(self.data.lock().clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        *self.data.lock() = tasks.to_vec();
        Ok(())
    }
}
