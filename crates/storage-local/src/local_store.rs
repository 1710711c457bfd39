//! JSON-file key-value store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;

use heritage_core::errors::Result;
use heritage_core::store::KeyValueStore;

use crate::errors::StorageError;

/// Durable key-value store over a single JSON object file.
///
/// The whole map lives in memory behind a mutex; every mutation rewrites the
/// backing file through a temp-file-and-rename, so a crashed write leaves
/// the previous file intact. Last writer wins; cross-process consistency is
/// best-effort, matching the substrate this replaces.
pub struct LocalStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl LocalStore {
    /// Opens the store at `path`, creating parent directories as needed.
    ///
    /// A corrupted backing file fails soft: the anomaly is logged and the
    /// store starts empty rather than refusing to open.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::from(e).into_write_error())?;
        }

        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(StorageError::Json(e)) => {
                warn!(
                    "Backing file {} is corrupted, starting empty: {e}",
                    path.display()
                );
                HashMap::new()
            }
            Err(e) => return Err(e.into_read_error()),
        };

        Ok(LocalStore {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn load(path: &Path) -> std::result::Result<HashMap<String, String>, StorageError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) -> std::result::Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let previous = entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.persist(&entries) {
            // Keep memory consistent with the file we failed to replace.
            match previous {
                Some(prev) => entries.insert(key.to_string(), prev),
                None => entries.remove(key),
            };
            return Err(e.into_write_error());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let previous = match entries.remove(key) {
            Some(prev) => prev,
            None => return Ok(()),
        };

        if let Err(e) = self.persist(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e.into_write_error());
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let previous = std::mem::take(&mut *entries);

        if let Err(e) = self.persist(&entries) {
            *entries = previous;
            return Err(e.into_write_error());
        }
        Ok(())
    }
}
