//! Taskpad - a local todo manager backed by a single-blob store.
//!
//! This library provides the core functionality for the `tp` CLI tool:
//! the todo store, its pluggable storage backends, and the data models.

pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod storage;

/// Test utilities for isolated store instances.
#[cfg(test)]
pub(crate) mod test_utils {
    use crate::storage::{TodoStore, backend::MemoryBackend};

    /// A store over an in-memory backend, isolated per test.
    pub fn memory_store() -> TodoStore {
        TodoStore::with_backend(Box::new(MemoryBackend::new()))
    }

    /// A store whose backend rejects every read and write.
    ///
    /// Used to verify that storage failures degrade to the default
    /// collection instead of propagating.
    pub fn broken_store() -> TodoStore {
        TodoStore::with_backend(Box::new(crate::storage::backend::BrokenBackend))
    }
}

/// Library-level error type for taskpad operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for taskpad operations.
pub type Result<T> = std::result::Result<T, Error>;
