//! Task store, storage backend trait, and backend implementations.
//!
//! # Architecture
//!
//! The storage system has two layers:
//!
//! 1. **[`TaskStore<B>`]** -- All domain logic: id assignment, title
//!    validation, the completion-timestamp invariant, queries, and the
//!    save-after-every-mutation policy.
//!
//! 2. **[`StorageBackend`]** -- Dumb whole-collection load/save trait that
//!    backends implement. No domain logic.
//!
//! # Backends
//!
//! - [`FileBackend`](crate::store::file::FileBackend) -- One task per line
//!   in a single flat file, rewritten wholesale on every save. The default.
//! - [`InMemoryBackend`](crate::store::memory::InMemoryBackend) -- Keeps the
//!   saved collection in memory; used by tests and non-durable callers.
//!
//! # Supporting Types
//!
//! - [`StoreConfig`] - Storage directory and file name for the default
//!   file backend.

pub mod backend;
pub mod file;
pub mod memory;

use std::path::{Path, PathBuf};

pub use backend::{StorageBackend, StorageError};

use crate::error::TaskError;
use crate::store::file::FileBackend;
use crate::types::{Priority, Task};

/// Storage location for the default file backend.
///
/// # Defaults
///
/// | Setting     | Default       |
/// |-------------|---------------|
/// | `data_dir`  | `data`        |
/// | `file_name` | `tasks.jsonl` |
///
/// # Examples
///
/// ```
/// use taskpad::StoreConfig;
///
/// let config = StoreConfig::default().with_data_dir("/tmp/taskpad");
/// assert_eq!(config.path().to_str().unwrap(), "/tmp/taskpad/tasks.jsonl");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the storage file. Created on first save if absent.
    pub data_dir: PathBuf,

    /// Name of the storage file inside `data_dir`.
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            file_name: "tasks.jsonl".to_string(),
        }
    }
}

impl StoreConfig {
    /// Sets the storage directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the storage file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// The full path of the storage file.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

/// In-memory owner of all task records and sole mutation/query entry point.
///
/// The store owns the ordered collection (insertion order, which is not
/// necessarily id order once records have been deleted) and the next-id
/// counter. Every successful mutation rewrites the full collection through
/// the backend; there is no incremental persistence and no batching.
///
/// # Persistence Failures
///
/// A mutation applies its in-memory change first and persists second. If
/// persisting fails, the in-memory change is kept and the error is
/// returned, so the caller decides whether to surface the durability
/// problem; the session keeps working either way.
///
/// # Examples
///
/// ```
/// use taskpad::{InMemoryBackend, Priority, TaskStore};
///
/// let mut store = TaskStore::with_backend(InMemoryBackend::new())?;
/// let id = store.add("Water the plants", "balcony first", Priority::Low)?.id;
///
/// store.set_completed(id, true)?;
/// assert_eq!(store.completed_count(), 1);
/// # Ok::<(), taskpad::TaskError>(())
/// ```
#[derive(Debug)]
pub struct TaskStore<B: StorageBackend = FileBackend> {
    tasks: Vec<Task>,
    next_id: u64,
    backend: B,
}

impl TaskStore<FileBackend> {
    /// Opens a store over the default storage location (`data/tasks.jsonl`
    /// relative to the working directory), loading any existing collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Storage`] if the storage file exists but cannot
    /// be read. A missing file is not an error; the store starts empty.
    pub fn open() -> Result<Self, TaskError> {
        Self::with_config(StoreConfig::default())
    }

    /// Opens a store over the location described by `config`.
    ///
    /// # Errors
    ///
    /// Same as [`TaskStore::open`].
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpad::{StoreConfig, TaskStore};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let config = StoreConfig::default().with_data_dir(dir.path());
    /// let store = TaskStore::with_config(config)?;
    /// assert!(store.is_empty());
    /// # Ok::<(), taskpad::TaskError>(())
    /// ```
    pub fn with_config(config: StoreConfig) -> Result<Self, TaskError> {
        Self::with_backend(FileBackend::new(config.path()))
    }

    /// The path of the storage file backing this store.
    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}

impl<B: StorageBackend> TaskStore<B> {
    /// Creates a store over an arbitrary backend, loading the existing
    /// collection and deriving the next-id counter from it
    /// (max existing id + 1, or 1 for an empty collection).
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Storage`] if the backend fails to load.
    pub fn with_backend(backend: B) -> Result<Self, TaskError> {
        let tasks = backend.load()?;
        let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        tracing::debug!(count = tasks.len(), next_id, "task collection loaded");
        Ok(Self {
            tasks,
            next_id,
            backend,
        })
    }

    // ---- Mutations (persist on success) ----

    /// Adds a new pending task and returns it.
    ///
    /// Title and description are trimmed; the title must be non-empty
    /// after trimming. The new record gets the next identifier in the
    /// store's monotonic sequence.
    ///
    /// # Errors
    ///
    /// - [`TaskError::EmptyTitle`] if the trimmed title is empty (nothing
    ///   is added or persisted).
    /// - [`TaskError::Storage`] if persisting fails (the task is still in
    ///   the in-memory collection).
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<&Task, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let task = Task::new(self.next_id, title, description.trim(), priority);
        self.next_id += 1;

        let index = self.tasks.len();
        self.tasks.push(task);
        self.persist()?;
        Ok(&self.tasks[index])
    }

    /// Removes the task with the given id and returns it.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task has that id (nothing is
    ///   persisted).
    /// - [`TaskError::Storage`] if persisting fails (the task is already
    ///   gone from the in-memory collection).
    pub fn remove(&mut self, id: u64) -> Result<Task, TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound { id })?;
        let task = self.tasks.remove(index);
        self.persist()?;
        Ok(task)
    }

    /// Sets the completion flag of the task with the given id, keeping the
    /// completion timestamp in sync (set on false→true, cleared on
    /// true→false, preserved on a repeated complete).
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task has that id (nothing is
    ///   persisted).
    /// - [`TaskError::Storage`] if persisting fails.
    pub fn set_completed(&mut self, id: u64, completed: bool) -> Result<&Task, TaskError> {
        let index = self.index_of(id).ok_or(TaskError::NotFound { id })?;
        self.tasks[index].set_completed(completed);
        self.persist()?;
        Ok(&self.tasks[index])
    }

    /// Replaces the title, description, and priority of the task with the
    /// given id. Completion state and the creation timestamp are untouched.
    ///
    /// # Errors
    ///
    /// - [`TaskError::EmptyTitle`] if the trimmed title is empty.
    /// - [`TaskError::NotFound`] if no task has that id. Neither error
    ///   persists anything.
    /// - [`TaskError::Storage`] if persisting fails.
    pub fn update(
        &mut self,
        id: u64,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<&Task, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let index = self.index_of(id).ok_or(TaskError::NotFound { id })?;
        let task = &mut self.tasks[index];
        task.title = title.to_string();
        task.description = description.trim().to_string();
        task.priority = priority;

        self.persist()?;
        Ok(&self.tasks[index])
    }

    // ---- Queries (no persistence) ----

    /// All records, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The record with the given id, if present.
    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Records whose completion flag is set, order preserved.
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    /// Records whose completion flag is clear, order preserved.
    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.completed).collect()
    }

    /// Records with exactly the given priority, order preserved.
    ///
    /// Case-insensitive string input is served by parsing into
    /// [`Priority`] first:
    ///
    /// ```
    /// use taskpad::{InMemoryBackend, Priority, TaskStore};
    ///
    /// let mut store = TaskStore::with_backend(InMemoryBackend::new())?;
    /// store.add("a", "", Priority::High)?;
    /// store.add("b", "", Priority::Low)?;
    ///
    /// let high = store.tasks_by_priority("HIGH".parse().unwrap());
    /// assert_eq!(high.len(), 1);
    /// # Ok::<(), taskpad::TaskError>(())
    /// ```
    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.priority == priority)
            .collect()
    }

    /// Total number of records.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of completed records.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Number of pending records.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ---- Internals ----

    fn index_of(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn persist(&self) -> Result<(), TaskError> {
        self.backend.save(&self.tasks)?;
        tracing::debug!(count = self.tasks.len(), "task collection persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryBackend;
    use pretty_assertions::assert_eq;

    fn store() -> TaskStore<InMemoryBackend> {
        TaskStore::with_backend(InMemoryBackend::new()).unwrap()
    }

    #[test]
    fn add_assigns_sequential_ids_from_one() {
        let mut store = store();
        let first = store.add("a", "", Priority::High).unwrap().id;
        let second = store.add("b", "", Priority::Low).unwrap().id;
        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn add_trims_title_and_description() {
        let mut store = store();
        let task = store.add("  padded  ", "  also padded  ", Priority::Medium).unwrap();
        assert_eq!(task.title, "padded");
        assert_eq!(task.description, "also padded");
    }

    #[test]
    fn add_rejects_empty_title() {
        let mut store = store();
        assert!(matches!(store.add("", "d", Priority::Low), Err(TaskError::EmptyTitle)));
        assert!(matches!(
            store.add("   ", "d", Priority::Low),
            Err(TaskError::EmptyTitle)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn next_id_continues_after_loaded_collection() {
        let backend = InMemoryBackend::new();
        backend
            .save(&[
                Task::new(3, "three", "", Priority::Low),
                Task::new(7, "seven", "", Priority::High),
            ])
            .unwrap();

        let mut store = TaskStore::with_backend(backend).unwrap();
        assert_eq!(store.task_count(), 2);
        assert_eq!(store.add("next", "", Priority::Medium).unwrap().id, 8);
    }

    #[test]
    fn remove_returns_record_and_preserves_order() {
        let mut store = store();
        store.add("a", "", Priority::High).unwrap();
        store.add("b", "", Priority::Low).unwrap();
        store.add("c", "", Priority::Medium).unwrap();

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.title, "b");

        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_unknown_id_is_an_error() {
        let mut store = store();
        store.add("a", "", Priority::High).unwrap();
        assert!(matches!(store.remove(99), Err(TaskError::NotFound { id: 99 })));
        assert_eq!(store.task_count(), 1);
    }

    #[test]
    fn removed_id_is_not_reused() {
        let mut store = store();
        store.add("a", "", Priority::High).unwrap();
        store.add("b", "", Priority::Low).unwrap();
        store.remove(2).unwrap();
        assert_eq!(store.add("c", "", Priority::Low).unwrap().id, 3);
    }

    #[test]
    fn set_completed_round_trip() {
        let mut store = store();
        store.add("a", "", Priority::High).unwrap();

        let task = store.set_completed(1, true).unwrap();
        assert!(task.completed);
        assert!(task.completed_at.is_some());

        let task = store.set_completed(1, false).unwrap();
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn set_completed_unknown_id_is_an_error() {
        let mut store = store();
        assert!(matches!(
            store.set_completed(5, true),
            Err(TaskError::NotFound { id: 5 })
        ));
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = store();
        store.add("old title", "old desc", Priority::Low).unwrap();
        store.set_completed(1, true).unwrap();

        let task = store.update(1, "new title", "new desc", Priority::High).unwrap();
        assert_eq!(task.title, "new title");
        assert_eq!(task.description, "new desc");
        assert_eq!(task.priority, Priority::High);
        // Completion state and creation time are untouched by update.
        assert!(task.completed);
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn update_rejects_empty_title_and_unknown_id() {
        let mut store = store();
        store.add("a", "", Priority::High).unwrap();
        assert!(matches!(
            store.update(1, " ", "d", Priority::Low),
            Err(TaskError::EmptyTitle)
        ));
        assert!(matches!(
            store.update(9, "t", "d", Priority::Low),
            Err(TaskError::NotFound { id: 9 })
        ));
        assert_eq!(store.task(1).unwrap().title, "a");
    }

    #[test]
    fn filters_and_counts() {
        let mut store = store();
        store.add("a", "", Priority::High).unwrap();
        store.add("b", "", Priority::Medium).unwrap();
        store.add("c", "", Priority::Low).unwrap();
        store.add("d", "", Priority::High).unwrap();
        store.set_completed(2, true).unwrap();

        let high = store.tasks_by_priority(Priority::High);
        assert_eq!(
            high.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["a", "d"]
        );

        assert_eq!(store.task_count(), 4);
        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.pending_count(), 3);
        assert_eq!(store.completed_tasks().len(), 1);
        assert_eq!(store.pending_tasks().len(), 3);
    }

    #[test]
    fn task_lookup() {
        let mut store = store();
        store.add("a", "", Priority::High).unwrap();
        assert_eq!(store.task(1).unwrap().title, "a");
        assert!(store.task(2).is_none());
    }

    #[test]
    fn every_mutation_reaches_the_backend() {
        let mut store = store();
        store.add("a", "", Priority::High).unwrap();
        store.add("b", "", Priority::Low).unwrap();
        assert_eq!(store.backend.len(), 2);

        store.set_completed(1, true).unwrap();
        let saved = store.backend.load().unwrap();
        assert!(saved[0].completed);

        store.remove(2).unwrap();
        assert_eq!(store.backend.len(), 1);
    }

    #[test]
    fn store_config_path() {
        let config = StoreConfig::default();
        assert_eq!(config.path(), PathBuf::from("data").join("tasks.jsonl"));

        let config = StoreConfig::default()
            .with_data_dir("/somewhere")
            .with_file_name("todo.jsonl");
        assert_eq!(config.path(), PathBuf::from("/somewhere").join("todo.jsonl"));
    }
}
