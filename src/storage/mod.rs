//! Storage layer for taskpad data.
//!
//! The entire collection lives as one JSON blob under a single key. Every
//! mutating operation is a read-modify-write of the whole blob: load the
//! full collection, apply the one mutation, serialize and overwrite. This
//! is only safe under a single-writer execution model; two concurrent
//! processes racing on the blob can lose updates (last write wins).
//!
//! Read failures (missing or corrupt blob) degrade to the default empty
//! collection; write failures are logged and swallowed. No store operation
//! surfaces an error to its caller.

pub mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use crate::Result;
use crate::models::{NewTodo, Todo};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::warn;

/// The one key under which the todo collection is stored.
pub const TODOS_KEY: &str = "todos";

/// Sole gateway between the CLI and the persisted todo collection.
pub struct TodoStore {
    backend: Box<dyn StorageBackend>,
}

impl TodoStore {
    /// Open a file-backed store rooted at the given data directory,
    /// creating the directory if necessary.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let backend = FileBackend::new(data_dir.to_path_buf())?;
        Ok(Self {
            backend: Box::new(backend),
        })
    }

    /// Build a store over an arbitrary backend.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Where this store keeps its data, for display.
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Load the full collection, falling back to empty on any failure.
    fn load(&self) -> Vec<Todo> {
        let blob = match self.backend.get(TODOS_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read todos from {}: {}", self.backend.location(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&blob) {
            Ok(todos) => todos,
            Err(e) => {
                warn!("discarding unreadable todo data: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the full collection, logging instead of failing.
    fn save(&mut self, todos: &[Todo]) {
        let blob = match serde_json::to_string(todos) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("failed to serialize todos: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(TODOS_KEY, &blob) {
            warn!("failed to write todos to {}: {}", self.backend.location(), e);
        }
    }

    /// All todos in insertion order.
    pub fn get_all(&self) -> Vec<Todo> {
        self.load()
    }

    /// The todo with the given id, if present.
    pub fn get_by_id(&self, id: &str) -> Option<Todo> {
        self.load().into_iter().find(|todo| todo.id == id)
    }

    /// Create a todo from the given fields and append it to the collection.
    ///
    /// Trims title and description, stamps `created_at`, and generates an
    /// id unique within the collection. Title emptiness is the caller's
    /// responsibility; the store does not re-validate.
    pub fn add(&mut self, new: NewTodo) -> Todo {
        let mut todos = self.load();

        let title = new.title.trim().to_string();
        let mut attempt = 0u32;
        let mut id = generate_id(&title, attempt);
        while todos.iter().any(|todo| todo.id == id) {
            attempt += 1;
            id = generate_id(&title, attempt);
        }

        let todo = Todo {
            id,
            title,
            description: new.description.trim().to_string(),
            priority: new.priority,
            tag: new.tag,
            completed: false,
            created_at: Utc::now(),
            deadline: new.deadline,
            reminder: new.reminder,
        };

        todos.push(todo.clone());
        self.save(&todos);
        todo
    }

    /// Flip `completed` on the matching todo. Unknown ids leave the
    /// collection unchanged, though the blob is still rewritten.
    pub fn toggle(&mut self, id: &str) {
        let todos: Vec<Todo> = self
            .load()
            .into_iter()
            .map(|mut todo| {
                if todo.id == id {
                    todo.completed = !todo.completed;
                }
                todo
            })
            .collect();
        self.save(&todos);
    }

    /// Remove the matching todo. No-op for unknown ids.
    pub fn delete_one(&mut self, id: &str) {
        let todos: Vec<Todo> = self
            .load()
            .into_iter()
            .filter(|todo| todo.id != id)
            .collect();
        self.save(&todos);
    }

    /// Replace the collection with the empty one, unconditionally.
    pub fn delete_all(&mut self) {
        self.save(&[]);
    }

    /// First-run setup: when no collection exists yet, write the default
    /// (empty) one so subsequent reads are well-defined. Returns whether
    /// anything was written.
    pub fn initialize_if_empty(&mut self) -> bool {
        match self.backend.get(TODOS_KEY) {
            Ok(Some(_)) => false,
            Ok(None) => {
                self.save(&[]);
                true
            }
            Err(e) => {
                warn!("failed to probe {}: {}", self.backend.location(), e);
                false
            }
        }
    }
}

/// Resolve the data directory for the store.
///
/// Priority: explicit flag > `TP_DATA_DIR` env var > platform data dir.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Ok(path) = std::env::var("TP_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }
    let data_dir = dirs::data_dir()
        .ok_or_else(|| crate::Error::Other("Could not determine data directory".to_string()))?;
    Ok(data_dir.join("taskpad"))
}

/// Generate a todo id.
///
/// Format: `td-<8 hex chars>`, hashed from the title, the current
/// nanosecond timestamp, and a collision-retry counter. Creations are
/// serialized by the single-threaded CLI, so time-derived ids are unique
/// in practice; the caller still retries on collision.
pub fn generate_id(seed: &str, attempt: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(
        Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or(0)
            .to_le_bytes(),
    );
    hasher.update(attempt.to_le_bytes());
    let hash = hasher.finalize();
    let hash_hex = format!("{:x}", hash);
    format!("td-{}", &hash_hex[..8])
}

/// Validate that an id matches the `td-<8 hex>` format.
pub fn validate_id(id: &str) -> Result<()> {
    let suffix = id
        .strip_prefix("td-")
        .ok_or_else(|| crate::Error::InvalidInput(format!("ID must start with 'td-': {}", id)))?;
    if suffix.len() != 8 || !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(crate::Error::InvalidInput(format!(
            "ID suffix must be 8 hex characters, got: {}",
            suffix
        )));
    }
    Ok(())
}
