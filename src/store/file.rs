//! Flat-file storage backend.
//!
//! [`FileBackend`] keeps the whole collection in a single text file, one
//! record per line in the format defined by
//! [`Task::to_line`](crate::types::task::Task::to_line). Every save
//! rewrites the file wholesale; there is no appending and no partial
//! update.
//!
//! Loading is tolerant per line: a line that fails to parse is logged at
//! `warn` and skipped, so one corrupt record never takes the rest of the
//! collection down with it. A missing file is an empty collection, not an
//! error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::store::backend::{StorageBackend, StorageError};
use crate::types::Task;

/// Storage backend writing one task per line to a single file.
///
/// # Examples
///
/// ```
/// use taskpad::{FileBackend, StorageBackend};
///
/// let dir = tempfile::tempdir().unwrap();
/// let backend = FileBackend::new(dir.path().join("tasks.jsonl"));
/// assert!(backend.load().unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for the given file path.
    ///
    /// The file and its parent directory are created lazily on the first
    /// [`save`](StorageBackend::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this backend reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        let mut tasks = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Task::from_line(line) {
                Ok(task) => tasks.push(task),
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = number + 1,
                        error = %err,
                        "skipping unparseable task line"
                    );
                }
            }
        }
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|err| StorageError::Create {
                    path: dir.to_path_buf(),
                    source: err,
                })?;
            }
        }

        let mut contents = String::new();
        for task in tasks {
            let line = task.to_line().map_err(|err| StorageError::Encode {
                id: task.id,
                source: err,
            })?;
            contents.push_str(&line);
            contents.push('\n');
        }

        fs::write(&self.path, contents).map_err(|err| StorageError::Write {
            path: self.path.clone(),
            source: err,
        })
    }
}
