//! Storage backend trait and implementations.
//!
//! This module provides the persistence seam for the todo store:
//! - `FileBackend` - One file per key under the data directory (default)
//! - `MemoryBackend` - HashMap-backed fake for tests

use crate::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Trait for storage backends that hold raw serialized blobs.
///
/// Each key names one collection; the value is an opaque text blob the
/// store serializes and deserializes itself.
pub trait StorageBackend: Send + Sync {
    /// Read the blob stored under a key, or `None` if the key is unset.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the blob for a key, replacing any existing value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key and its blob entirely.
    fn clear(&mut self, key: &str) -> Result<()>;

    /// Get the storage location description (for display purposes).
    fn location(&self) -> String;

    /// Get the backend type name.
    fn backend_type(&self) -> &'static str;
}

/// File-backed storage: each key maps to `<root>/<key>.json`.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a file backend rooted at the given directory, creating it
    /// if necessary.
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn backend_type(&self) -> &'static str {
        "file"
    }
}

/// In-memory storage backend for tests.
#[derive(Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with a raw blob, bypassing the store.
    ///
    /// Lets tests plant corrupt or legacy data.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }

    fn backend_type(&self) -> &'static str {
        "memory"
    }
}

/// Backend where every operation fails, for exercising degraded paths.
#[cfg(test)]
pub struct BrokenBackend;

#[cfg(test)]
impl StorageBackend for BrokenBackend {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(crate::Error::Other("backend unavailable".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(crate::Error::Other("backend unavailable".to_string()))
    }

    fn clear(&mut self, _key: &str) -> Result<()> {
        Err(crate::Error::Other("backend unavailable".to_string()))
    }

    fn location(&self) -> String {
        "nowhere".to_string()
    }

    fn backend_type(&self) -> &'static str {
        "broken"
    }
}
