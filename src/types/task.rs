//! The task record and its priority level.
//!
//! [`Task`] is the persisted unit of data. Each record serializes to
//! exactly one line of text and deserializes from one line, so storage
//! backends can treat the collection as a plain line-oriented file.
//!
//! # Serialization
//!
//! A line is one JSON object with `camelCase` field names. JSON escaping
//! means titles and descriptions may contain any character (including the
//! field separator of older delimited formats, or embedded newlines)
//! without corrupting the line structure. `completedAt` serializes as
//! `null` (not omitted) when the task is not completed.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Task priority, a closed three-level scale.
///
/// `Display` and serde both use the lowercase token, and
/// [`FromStr`](str::parse) accepts any casing, so user-facing filter input
/// round-trips through the same representation that lands on disk.
///
/// # Examples
///
/// ```
/// use taskpad::Priority;
///
/// let p: Priority = "HIGH".parse().unwrap();
/// assert_eq!(p, Priority::High);
/// assert_eq!(p.to_string(), "high");
/// assert!("urgent".parse::<Priority>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention before anything else.
    High,
    /// The default middle ground.
    Medium,
    /// Can wait.
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Error returned when parsing a [`Priority`] from an unrecognized string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown priority: {0:?} (expected high, medium, or low)")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("high") {
            Ok(Self::High)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(Self::Medium)
        } else if s.eq_ignore_ascii_case("low") {
            Ok(Self::Low)
        } else {
            Err(UnknownPriority(s.to_string()))
        }
    }
}

/// One persisted to-do item.
///
/// Fields are public for read access; mutation should go through
/// [`TaskStore`](crate::store::TaskStore), which assigns identifiers,
/// maintains the completion-timestamp invariant via
/// [`set_completed`](Task::set_completed), and persists after every change.
///
/// # Invariants
///
/// - `id` is unique within a store for the record's lifetime.
/// - `created_at` is set once at construction and never changes.
/// - `completed_at` is `Some` if and only if `completed` is `true`.
///
/// # Examples
///
/// ```
/// use taskpad::{Priority, Task};
///
/// let task = Task::new(1, "Write report", "Q3 numbers", Priority::High);
/// assert_eq!(task.id, 1);
/// assert!(!task.completed);
/// assert!(task.completed_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier, monotonically increasing.
    pub id: u64,

    /// Short summary. Non-empty; emptiness is validated by the store,
    /// not by the record.
    pub title: String,

    /// Free-form description. May be empty.
    pub description: String,

    /// Whether the task is done.
    pub completed: bool,

    /// Local date-time of creation. Immutable after construction.
    pub created_at: NaiveDateTime,

    /// Local date-time of completion. `Some` exactly when `completed`
    /// is `true`; serializes as `null` otherwise.
    pub completed_at: Option<NaiveDateTime>,

    /// Priority level.
    pub priority: Priority,
}

impl Task {
    /// Creates a new pending task stamped with the current local time.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: Local::now().naive_local(),
            completed_at: None,
            priority,
        }
    }

    /// Sets the completion flag, keeping the completion timestamp in sync.
    ///
    /// Transitioning to completed stamps `completed_at` with the current
    /// local time; marking an already-completed task completed again keeps
    /// the original timestamp. Transitioning back to pending clears it.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpad::{Priority, Task};
    ///
    /// let mut task = Task::new(1, "Ship release", "", Priority::Medium);
    /// task.set_completed(true);
    /// assert!(task.completed_at.is_some());
    ///
    /// task.set_completed(false);
    /// assert!(task.completed_at.is_none());
    /// ```
    pub fn set_completed(&mut self, completed: bool) {
        if completed {
            if self.completed_at.is_none() {
                self.completed_at = Some(Local::now().naive_local());
            }
        } else {
            self.completed_at = None;
        }
        self.completed = completed;
    }

    /// Serializes this record to exactly one line of text (no trailing
    /// newline).
    ///
    /// # Errors
    ///
    /// Returns the underlying encoder error if the record cannot be
    /// serialized. This does not happen for records built through
    /// [`Task::new`] and [`Task::set_completed`].
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from one line of text.
    ///
    /// The inverse of [`to_line`](Task::to_line): for any valid record,
    /// `Task::from_line(&task.to_line()?)` reproduces an equal record.
    ///
    /// # Errors
    ///
    /// Returns the underlying decoder error for malformed lines, unknown
    /// priority tokens, or missing fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpad::{Priority, Task};
    ///
    /// let task = Task::new(3, "Back up photos", "external drive", Priority::Low);
    /// let line = task.to_line().unwrap();
    /// assert_eq!(Task::from_line(&line).unwrap(), task);
    /// ```
    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({})",
            if self.completed { "x" } else { " " },
            self.title,
            self.description,
            self.priority
        )
    }
}
