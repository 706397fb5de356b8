//! Process-local key-value persistence.
//!
//! The POS keeps its working state (session, last transaction, settings) in a
//! small key-value store: one JSON document per key. The [`FileStore`] backend
//! writes each key as a file under the configured data directory; the
//! [`MemoryStore`] backend backs tests.
//!
//! Corrupted documents are never fatal: a value that fails to deserialize is
//! logged, removed, and reported as absent, so the caller sees a fresh state
//! instead of an error loop.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Keys used by the POS in the key-value store.
pub mod keys {
    /// Key for the mock auth token of the logged-in session.
    pub const AUTH_TOKEN: &str = "pos_auth_token";

    /// Key for the serialized logged-in user.
    pub const USER: &str = "pos_user";

    /// Key for the last finalized transaction, consumed by the invoice view.
    pub const LAST_TRANSACTION: &str = "last_transaction";

    /// Key for the store profile settings.
    pub const SETTINGS_STORE: &str = "settings_store";

    /// Key for the printer settings.
    pub const SETTINGS_PRINTER: &str = "settings_printer";

    /// Key for the staff list.
    pub const SETTINGS_STAFF: &str = "settings_staff";

    /// Key for the notification settings.
    pub const SETTINGS_NOTIF: &str = "settings_notif";
}

/// Errors that can occur while reading or writing the store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage i/o failed for key {key}: {source}")]
    Io {
        /// The key being accessed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized for writing.
    #[error("could not serialize value for key {key}: {source}")]
    Serialize {
        /// The key being written.
        key: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// A process-local key-value store.
///
/// The trait seam lets front-ends run against the filesystem while tests run
/// entirely in memory.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw JSON document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend fails to read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a raw JSON document under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend fails to write.
    fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the document stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend fails to delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every document in the store (logout, or session reset).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend fails to delete.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Read and deserialize the value stored under `key`.
///
/// A present but corrupted value is treated as absent: the document is
/// removed and `None` is returned, so the caller starts from a clean state.
///
/// # Errors
///
/// Returns [`StorageError::Io`] only for backend failures, never for bad
/// content.
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_raw(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key, error = %err, "corrupted value in store, resetting key");
            store.remove(key)?;
            Ok(None)
        }
    }
}

/// Serialize and write `value` under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] if the value cannot be encoded, or
/// [`StorageError::Io`] if the backend fails to write.
pub fn put_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    store.put_raw(key, &raw)
}

/// File-backed store: one `<key>.json` file per key under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn io_err(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_owned(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_err(key, err)),
        }
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root).map_err(|e| Self::io_err(key, e))?;
        std::fs::write(self.path_for(key), value).map_err(|e| Self::io_err(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_err(key, err)),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(Self::io_err("*", err)),
        };

        for entry in entries {
            let entry = entry.map_err(|e| Self::io_err("*", e))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                std::fs::remove_file(&path).map_err(|e| Self::io_err("*", e))?;
            }
        }
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.map.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.locked().get(key).cloned())
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.locked().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.locked().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.locked().clear();
        Ok(())
    }
}
