//! Single-user task tracking core with durable line-oriented local storage.
//!
//! This crate owns the full lifecycle of short text tasks: creation,
//! editing, completion, deletion, and filtering, with the whole collection
//! persisted to a flat file between runs. It is the data layer a CLI or
//! GUI front end calls into; no presentation surface is defined here.
//!
//! # Overview
//!
//! A [`Task`](types::task::Task) carries a store-assigned integer id, a
//! title, a free-form description, a [`Priority`](types::task::Priority),
//! and a pair of timestamps tracking creation and completion. The
//! [`TaskStore`](store::TaskStore) owns the in-memory collection and is the
//! sole mutation and query entry point; after every successful mutation it
//! rewrites the full collection through a [`StorageBackend`](store::backend::StorageBackend).
//!
//! # Module Organization
//!
//! - [`types`] - The task record and priority types, including the
//!   one-line serialization contract used by storage.
//! - [`store`] - The task store, the storage backend trait, and the
//!   file-backed and in-memory backend implementations.
//! - [`error`] - Error types surfaced by store operations.

pub mod error;
pub mod store;
pub mod types;

// Re-exports for ergonomic access
pub use error::TaskError;
pub use store::backend::{StorageBackend, StorageError};
pub use store::file::FileBackend;
pub use store::memory::InMemoryBackend;
pub use store::{StoreConfig, TaskStore};
pub use types::{Priority, Task, UnknownPriority};
