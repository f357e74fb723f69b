//! Storage error types

use std::path::{Path, PathBuf};

/// Errors raised while loading or saving the contact collection
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Store file does not exist
    #[error("contact store not found: {}", .path.display())]
    Missing { path: PathBuf },

    /// Store file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store file is not a valid contact document
    #[error("malformed contact store {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Store file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be encoded
    #[error("failed to encode contacts: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StorageError {
    /// True for failures that happen while loading the collection
    #[inline]
    #[must_use]
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            Self::Missing { .. } | Self::Read { .. } | Self::Malformed { .. }
        )
    }

    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::Missing {
                path: path.to_path_buf(),
            }
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
