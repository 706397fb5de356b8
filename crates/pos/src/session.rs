//! Login session lifecycle.
//!
//! The session is an explicit context object loaded from and saved to the
//! key-value store, never ambient global state. Corrupted persisted session
//! data is treated as absent: the store is wiped and the user logs in again.

use arjuna_core::StoreKind;
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::storage::{KeyValueStore, StorageError, get_json, keys, put_json};

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
    /// Business mode derived from the user's email domain.
    pub store: StoreKind,
}

/// Loads, saves, and clears the persisted session.
pub struct SessionStore<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SessionStore<'a> {
    /// Create a session store over the given backend.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Persist a fresh login and return the session.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails to write.
    pub fn save(&self, user: User, token: String) -> Result<Session, StorageError> {
        put_json(self.store, keys::AUTH_TOKEN, &token)?;
        put_json(self.store, keys::USER, &user)?;

        let store = user.store_kind();
        tracing::info!(user = %user.email, %store, "session saved");

        Ok(Session { user, token, store })
    }

    /// Restore the persisted session, if any.
    ///
    /// A half-written or corrupted session (token without user, or
    /// undeserializable user) is wiped and reported as absent rather than
    /// surfaced as an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only for backend failures.
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        let token: Option<String> = get_json(self.store, keys::AUTH_TOKEN)?;
        let user: Option<User> = get_json(self.store, keys::USER)?;

        match (token, user) {
            (Some(token), Some(user)) => {
                let store = user.store_kind();
                Ok(Some(Session { user, token, store }))
            }
            (None, None) => Ok(None),
            _ => {
                tracing::warn!("partial session in store, resetting");
                self.store.clear()?;
                Ok(None)
            }
        }
    }

    /// Log out: wipe every persisted key, as the original front-end does.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails to delete.
    pub fn clear(&self) -> Result<(), StorageError> {
        tracing::info!("session cleared");
        self.store.clear()
    }
}
