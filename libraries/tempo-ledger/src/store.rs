//! Preference store seam
//!
//! The ledger persists through a single string-valued preference slot.
//! This module provides the seam and two stores: an in-memory one for
//! tests and ephemeral use, and a file-backed one whose writes replace
//! the file atomically so a crash mid-write never leaves a torn slot.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;

/// Key-value string preferences
///
/// Implementers back the ledger's durable slot. `get` is infallible by
/// contract: unreadable or missing content reads as absent.
pub trait PreferenceStore: Send + Sync {
    /// Read a preference value, `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a preference value
    ///
    /// # Errors
    /// Returns an error if the value cannot be made durable
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory preference store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed preference store
///
/// All preferences live in one JSON object file. Writes land in a
/// sibling temp file first and are renamed over the original, so readers
/// only ever see the previous or the new content, never a partial write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file
    ///
    /// The file does not need to exist yet; it is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> HashMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        let serialized = serde_json::to_string(&entries)?;

        let tmp = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
