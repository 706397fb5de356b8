//! Store, printer, notification, and staff configuration.
//!
//! Each configuration object owns one key in the key-value store and falls
//! back to its default when the key is absent (or corrupted, which the
//! storage layer reads as absent).

use arjuna_core::{PaperSize, StaffId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError, get_json, keys, put_json};

/// Minimum length for a new account password.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Errors from settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Staff entries need both a name and an email.
    #[error("staff name and email are required")]
    MissingStaffFields,

    /// No staff member with the given id.
    #[error("staff member {0} not found")]
    StaffNotFound(StaffId),

    /// New password and confirmation differ.
    #[error("new password and confirmation do not match")]
    PasswordMismatch,

    /// New password below the minimum length.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// Persistence failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Store profile shown on receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            name: "Arjuna Printing".to_owned(),
            address: "Jl. Ahmad Yani No. 88".to_owned(),
            phone: "0812-3456-7890".to_owned(),
        }
    }
}

/// Thermal printer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterSettings {
    pub paper_size: PaperSize,
    pub auto_cut: bool,
    pub footer_msg: String,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::Mm58,
            auto_cut: true,
            footer_msg: "Terima Kasih!".to_owned(),
        }
    }
}

/// Notification switches. `sound` gates the add-to-cart beep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifSettings {
    pub sound: bool,
    pub low_stock: bool,
    pub daily_report: bool,
}

impl Default for NotifSettings {
    fn default() -> Self {
        Self {
            sound: true,
            low_stock: true,
            daily_report: false,
        }
    }
}

/// A staff entry managed from the settings screen. Separate from the login
/// fixtures; role is free text as entered by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: String,
    pub email: String,
}

fn default_staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: StaffId::new(1),
            name: "Budi Santoso".to_owned(),
            role: "Manager".to_owned(),
            email: "budi@arjuna.com".to_owned(),
        },
        StaffMember {
            id: StaffId::new(2),
            name: "Siti Aminah".to_owned(),
            role: "Kasir".to_owned(),
            email: "siti@arjuna.com".to_owned(),
        },
    ]
}

/// Reads and writes the persisted settings objects.
pub struct SettingsStore<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SettingsStore<'a> {
    /// Create a settings store over the given backend.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the store profile, defaulting when unset.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for backend failures.
    pub fn store_profile(&self) -> Result<StoreProfile, StorageError> {
        Ok(get_json(self.store, keys::SETTINGS_STORE)?.unwrap_or_default())
    }

    /// Persist the store profile.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for backend failures.
    pub fn save_store_profile(&self, profile: &StoreProfile) -> Result<(), StorageError> {
        put_json(self.store, keys::SETTINGS_STORE, profile)
    }

    /// Load the printer settings, defaulting when unset.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for backend failures.
    pub fn printer(&self) -> Result<PrinterSettings, StorageError> {
        Ok(get_json(self.store, keys::SETTINGS_PRINTER)?.unwrap_or_default())
    }

    /// Persist the printer settings.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for backend failures.
    pub fn save_printer(&self, printer: &PrinterSettings) -> Result<(), StorageError> {
        put_json(self.store, keys::SETTINGS_PRINTER, printer)
    }

    /// Load the notification settings, defaulting when unset.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for backend failures.
    pub fn notif(&self) -> Result<NotifSettings, StorageError> {
        Ok(get_json(self.store, keys::SETTINGS_NOTIF)?.unwrap_or_default())
    }

    /// Persist the notification settings.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for backend failures.
    pub fn save_notif(&self, notif: &NotifSettings) -> Result<(), StorageError> {
        put_json(self.store, keys::SETTINGS_NOTIF, notif)
    }

    /// Whether the add-to-cart sound is enabled. Storage trouble falls back
    /// to enabled, matching the original front-end.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.notif().map_or(true, |notif| notif.sound)
    }

    /// Load the staff list, defaulting when unset.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for backend failures.
    pub fn staff(&self) -> Result<Vec<StaffMember>, StorageError> {
        Ok(get_json(self.store, keys::SETTINGS_STAFF)?.unwrap_or_else(default_staff))
    }

    /// Add a staff member and persist the list.
    ///
    /// Ids are time-based (milliseconds), bumped past the current maximum so
    /// two quick adds never collide.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingStaffFields`] if name or email is
    /// blank, or a storage error.
    pub fn add_staff(
        &self,
        name: &str,
        role: &str,
        email: &str,
    ) -> Result<StaffMember, SettingsError> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(SettingsError::MissingStaffFields);
        }

        let mut staff = self.staff()?;
        let max_id = staff.iter().map(|s| s.id.as_i64()).max().unwrap_or(0);
        let id = StaffId::new(Utc::now().timestamp_millis().max(max_id + 1));

        let member = StaffMember {
            id,
            name: name.trim().to_owned(),
            role: role.trim().to_owned(),
            email: email.trim().to_owned(),
        };
        staff.push(member.clone());
        put_json(self.store, keys::SETTINGS_STAFF, &staff)?;
        Ok(member)
    }

    /// Remove a staff member by id and persist the list.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::StaffNotFound`] for an unknown id, or a
    /// storage error.
    pub fn remove_staff(&self, id: StaffId) -> Result<(), SettingsError> {
        let mut staff = self.staff()?;
        let before = staff.len();
        staff.retain(|member| member.id != id);
        if staff.len() == before {
            return Err(SettingsError::StaffNotFound(id));
        }
        put_json(self.store, keys::SETTINGS_STAFF, &staff)?;
        Ok(())
    }
}

/// Validate a password change request.
///
/// No credential store exists behind the mock, so validation is the whole
/// operation; the caller reports success to the user.
///
/// # Errors
///
/// Returns [`SettingsError::PasswordMismatch`] or
/// [`SettingsError::PasswordTooShort`].
pub fn validate_password_change(new: &str, confirm: &str) -> Result<(), SettingsError> {
    if new != confirm {
        return Err(SettingsError::PasswordMismatch);
    }
    if new.len() < MIN_PASSWORD_LENGTH {
        return Err(SettingsError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_when_unset() {
        let backend = MemoryStore::new();
        let settings = SettingsStore::new(&backend);

        assert_eq!(settings.store_profile().unwrap(), StoreProfile::default());
        assert_eq!(settings.printer().unwrap(), PrinterSettings::default());
        assert_eq!(settings.notif().unwrap(), NotifSettings::default());
        assert_eq!(settings.staff().unwrap().len(), 2);
        assert!(settings.sound_enabled());
    }

    #[test]
    fn test_save_and_reload_profile() {
        let backend = MemoryStore::new();
        let settings = SettingsStore::new(&backend);

        let profile = StoreProfile {
            name: "Arjuna Seragam".to_owned(),
            address: "Jl. Diponegoro No. 12".to_owned(),
            phone: "0813-0000-1111".to_owned(),
        };
        settings.save_store_profile(&profile).unwrap();
        assert_eq!(settings.store_profile().unwrap(), profile);
    }

    #[test]
    fn test_sound_follows_notif_setting() {
        let backend = MemoryStore::new();
        let settings = SettingsStore::new(&backend);

        settings
            .save_notif(&NotifSettings {
                sound: false,
                ..NotifSettings::default()
            })
            .unwrap();
        assert!(!settings.sound_enabled());
    }

    #[test]
    fn test_add_staff_validates_fields() {
        let backend = MemoryStore::new();
        let settings = SettingsStore::new(&backend);

        assert!(matches!(
            settings.add_staff("", "Kasir", "x@arjuna.com"),
            Err(SettingsError::MissingStaffFields)
        ));
        assert!(matches!(
            settings.add_staff("Rudi", "Kasir", "  "),
            Err(SettingsError::MissingStaffFields)
        ));
    }

    #[test]
    fn test_add_and_remove_staff() {
        let backend = MemoryStore::new();
        let settings = SettingsStore::new(&backend);

        let added = settings
            .add_staff("Rudi Hartono", "Kasir", "rudi@arjuna.com")
            .unwrap();
        assert_eq!(settings.staff().unwrap().len(), 3);

        settings.remove_staff(added.id).unwrap();
        assert_eq!(settings.staff().unwrap().len(), 2);

        assert!(matches!(
            settings.remove_staff(added.id),
            Err(SettingsError::StaffNotFound(_))
        ));
    }

    #[test]
    fn test_quick_staff_adds_get_distinct_ids() {
        let backend = MemoryStore::new();
        let settings = SettingsStore::new(&backend);

        let a = settings.add_staff("A", "Kasir", "a@arjuna.com").unwrap();
        let b = settings.add_staff("B", "Kasir", "b@arjuna.com").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_password_change_rules() {
        assert!(validate_password_change("rahasia1", "rahasia1").is_ok());
        assert!(matches!(
            validate_password_change("rahasia1", "rahasia2"),
            Err(SettingsError::PasswordMismatch)
        ));
        assert!(matches!(
            validate_password_change("abc", "abc"),
            Err(SettingsError::PasswordTooShort)
        ));
    }
}
