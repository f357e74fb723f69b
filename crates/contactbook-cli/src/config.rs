//! Application configuration
//!
//! Defaults, then an optional TOML file, then command-line overrides.
//!
//! ```toml
//! [store]
//! path = "contacts.json"
//! pretty = true
//! create_if_missing = false
//!
//! [log]
//! filter = "warn"
//! ```

use contactbook_store::{JsonFileStore, StorageError, DEFAULT_STORE_PATH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Contact store settings
    pub store: StoreConfig,
    /// Logging settings
    pub log: LogConfig,
}

impl AppConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid configuration
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// With store file path
    #[inline]
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.path = path.into();
        self
    }

    /// With pretty-printed store output
    #[inline]
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.store.pretty = pretty;
        self
    }

    /// With store creation on first run
    #[inline]
    #[must_use]
    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.store.create_if_missing = create;
        self
    }

    /// Open the configured store
    ///
    /// # Errors
    /// Returns error if `create_if_missing` is set and the empty store cannot
    /// be written
    pub fn open_store(&self) -> Result<JsonFileStore, StorageError> {
        let mut store = JsonFileStore::new(&self.store.path).with_pretty(self.store.pretty);
        if self.store.create_if_missing {
            store.init_if_missing()?;
        } else if !store.path().exists() {
            tracing::warn!(path = %store.path().display(), "contact store does not exist");
        }
        Ok(store)
    }
}

/// Contact store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file, relative to the working directory unless absolute
    pub path: PathBuf,
    /// Pretty-print the JSON document
    pub pretty: bool,
    /// Write an empty store when none exists
    pub create_if_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
            pretty: true,
            create_if_missing: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config text is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Invalid(#[from] toml::de::Error),
}
