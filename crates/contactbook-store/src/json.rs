//! JSON file store
//!
//! The collection lives in one JSON array at a fixed path. Saves write a
//! temporary file next to the target and rename it into place, so a crash
//! mid-write leaves the previous document intact. An existing file keeps its
//! permissions across saves.

use crate::error::StorageError;
use crate::store::ContactStore;
use contactbook_model::Contact;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default store location, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "contacts.json";

/// Contact store backed by a single JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Create store for the given file (not touched until first load/save)
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// With pretty-printed output (default) or a compact single line
    #[inline]
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Store file path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty collection if no store file exists yet
    ///
    /// Returns true when a new file was created.
    ///
    /// # Errors
    /// Returns error if the empty document cannot be written
    pub fn init_if_missing(&mut self) -> Result<bool, StorageError> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&[])?;
        tracing::info!(path = %self.path.display(), "created empty contact store");
        Ok(true)
    }

    fn encode(&self, contacts: &[Contact]) -> Result<Vec<u8>, StorageError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(contacts)?
        } else {
            serde_json::to_vec(contacts)?
        };
        Ok(bytes)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Contact>, StorageError> {
        let bytes = std::fs::read(&self.path).map_err(|e| StorageError::read(&self.path, e))?;
        let contacts: Vec<Contact> =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), StorageError> {
        let bytes = self.encode(contacts)?;

        let mut tmp = tempfile::NamedTempFile::new_in(self.parent_dir())
            .map_err(|e| StorageError::write(&self.path, e))?;
        tmp.write_all(&bytes)
            .and_then(|()| tmp.flush())
            .map_err(|e| StorageError::write(&self.path, e))?;
        if let Ok(existing) = std::fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| StorageError::write(&self.path, e))?;
        }
        tmp.persist(&self.path)
            .map_err(|e| StorageError::write(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}
