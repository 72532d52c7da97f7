//! JSON file-backed key-value store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{CastError, Result};

/// String keys mapped to JSON values, persisted as one JSON object.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
    dirty: bool,
}

impl KeyValueStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| CastError::Io {
                path: path.clone(),
                message: format!("Failed to read store: {}", e),
            })?;
            Self::parse(&content, &path)?
        } else {
            tracing::debug!(path = %path.display(), "store file missing, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    fn parse(content: &str, path: &Path) -> Result<BTreeMap<String, Value>> {
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(content).map_err(|e| CastError::Parse {
            message: format!("Invalid store file {}: {}", path.display(), e),
            help: Some("The store must be a JSON object; delete it to start over".to_string()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw value for a key.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Typed value for a key. Returns `None` if the key is missing or the
    /// value does not deserialize as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable store value");
                None
            }
        }
    }

    /// Set a key. Values equal to the stored one do not mark the store dirty.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| CastError::Parse {
            message: format!("Failed to encode {}: {}", key, e),
            help: None,
        })?;
        if self.entries.get(key) != Some(&value) {
            self.entries.insert(key.to_string(), value);
            self.dirty = true;
        }
        Ok(())
    }

    pub fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the store to disk if anything changed since it was opened or
    /// last flushed.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CastError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create store directory: {}", e),
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| CastError::Parse {
            message: format!("Failed to encode store: {}", e),
            help: None,
        })?;
        fs::write(&self.path, json).map_err(|e| CastError::Io {
            path: self.path.clone(),
            message: format!("Failed to write store: {}", e),
        })?;

        tracing::debug!(path = %self.path.display(), keys = self.entries.len(), "store flushed");
        self.dirty = false;
        Ok(())
    }
}
