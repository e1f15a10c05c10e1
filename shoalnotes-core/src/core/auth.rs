//! Session and credential management.
//!
//! [`AuthManager`] owns the authenticated identity. It validates signup and
//! login against the persisted account list and keeps the active session in
//! sync with its persisted record. Validation failures come back as `false`;
//! unreadable persisted data degrades to "no accounts" or "no session" and is
//! never an error the caller sees.

use crate::core::account::{Account, Session};
use crate::core::storage::SharedStore;
use log::{error, warn};
use uuid::Uuid;

/// Key under which the global account list is persisted.
pub const USERS_KEY: &str = "notes_app_users";

/// Key under which the active session is persisted; absent when logged out.
pub const SESSION_KEY: &str = "notes_app_session";

/// Owns the current authenticated identity.
pub struct AuthManager {
    store: SharedStore,
    session: Option<Session>,
}

impl AuthManager {
    /// Opens the manager over `store` and restores any persisted session.
    ///
    /// A missing session record starts signed out. An unparseable one is
    /// removed from the store and also starts signed out; the failure is
    /// logged, never surfaced.
    pub fn new(store: SharedStore) -> Self {
        let session = restore_session(&store);
        Self { store, session }
    }

    /// Returns the active session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a session is currently active.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Registers a new account.
    ///
    /// Returns `false` without mutating anything when any field is empty or
    /// when the username or email is already taken (case-sensitive, either
    /// collision blocks). On success the new record is appended and the full
    /// list rewritten. Signup never establishes a session; callers log in
    /// separately.
    pub fn signup(&mut self, username: &str, email: &str, password: &str) -> bool {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return false;
        }

        let mut accounts = self.load_accounts();
        if accounts
            .iter()
            .any(|a| a.username == username || a.email == email)
        {
            return false;
        }

        accounts.push(Account {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        self.save_accounts(&accounts);
        true
    }

    /// Attempts to log in with the given credentials.
    ///
    /// Requires an exact, case-sensitive match on both username and password.
    /// On a match the derived [`Session`] becomes active and is persisted; on
    /// a mismatch returns `false` and leaves any prior session untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let accounts = self.load_accounts();
        let account = match accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
        {
            Some(account) => account,
            None => return false,
        };

        let session = Session::from_account(account);
        match serde_json::to_string(&session) {
            Ok(json) => {
                if let Err(e) = self.store.borrow_mut().set(SESSION_KEY, &json) {
                    error!("failed to persist session: {e}");
                }
            }
            Err(e) => error!("failed to serialize session: {e}"),
        }
        self.session = Some(session);
        true
    }

    /// Signs out: clears the in-memory session and removes the persisted
    /// record. Always succeeds.
    pub fn logout(&mut self) {
        self.session = None;
        if let Err(e) = self.store.borrow_mut().remove(SESSION_KEY) {
            error!("failed to remove persisted session: {e}");
        }
    }

    fn load_accounts(&self) -> Vec<Account> {
        let raw = match self.store.borrow().get(USERS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read account list: {e}");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("failed to parse account list, treating as empty: {e}");
            Vec::new()
        })
    }

    fn save_accounts(&self, accounts: &[Account]) {
        match serde_json::to_string(accounts) {
            Ok(json) => {
                if let Err(e) = self.store.borrow_mut().set(USERS_KEY, &json) {
                    error!("failed to persist account list: {e}");
                }
            }
            Err(e) => error!("failed to serialize account list: {e}"),
        }
    }
}

fn restore_session(store: &SharedStore) -> Option<Session> {
    let raw = match store.borrow().get(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("failed to read persisted session: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!("discarding unparseable persisted session: {e}");
            if let Err(e) = store.borrow_mut().remove(SESSION_KEY) {
                error!("failed to remove corrupt session record: {e}");
            }
            None
        }
    }
}
