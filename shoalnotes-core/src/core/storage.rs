//! Key-value persistence substrate.
//!
//! The managers treat persistence as a flat, string-keyed store with three
//! operations: get, set, remove. Nothing iterates keys and nothing is
//! transactional; every mutation rewrites one value wholesale. [`MemoryStore`]
//! backs tests, [`FileStore`] keeps the whole map as a single JSON snapshot
//! on disk.

use crate::core::error::Result;
use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A flat string-keyed store, scoped to one application profile.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Shared handle to a substrate used by both managers.
///
/// The application is single-threaded and event-driven, so a plain
/// `Rc<RefCell<_>>` is all the coordination the substrate needs. Borrows are
/// kept to single statements; nothing holds a borrow across a manager call.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// Wraps a store in a [`SharedStore`] handle.
pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}

/// In-memory substrate. Nothing survives the process; the default in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed substrate: the whole map is one pretty-printed JSON object,
/// rewritten on every mutation.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Opens the snapshot at `path`.
    ///
    /// A missing file starts empty; a corrupt one is discarded with a warning
    /// and also starts empty, mirroring how the managers treat unparseable
    /// persisted values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShoalnotesError::Io`] if an existing file cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "corrupt store snapshot at {}: {e}; starting empty",
                        path.display()
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// Returns the path of the backing snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
