//! Staff user accounts.

use arjuna_core::{Email, Role, StoreKind, UserId};
use serde::{Deserialize, Serialize};

/// A staff account from the user fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
}

impl User {
    /// The store context this account operates in, derived from the email
    /// domain.
    #[must_use]
    pub fn store_kind(&self) -> StoreKind {
        StoreKind::for_email(&self.email)
    }
}
