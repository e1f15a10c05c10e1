//! Credential and session records.

use serde::{Deserialize, Serialize};

/// A persisted credential record.
///
/// The password is stored and compared in plaintext to stay compatible with
/// the persisted account layout. That is a documented weakness of the format,
/// not a recommendation; anything handling real credentials wants a salted
/// one-way hash instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The currently authenticated identity, persisted separately from accounts.
///
/// Derived from an [`Account`] on login; `is_authenticated` is always `true`
/// while a session record exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_authenticated: bool,
}

impl Session {
    /// Derives a session from a stored account.
    ///
    /// The password never leaves the account record.
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
            is_authenticated: true,
        }
    }
}
