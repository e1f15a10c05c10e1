//! Core library for Shoalnotes — a local-first, single-session personal notes application.
//!
//! Two cooperating state containers drive the application: [`AuthManager`] owns
//! the authenticated identity and [`NoteStore`] owns that identity's note list.
//! Both read and write the same flat key-value substrate through a shared
//! [`SharedStore`] handle; presentation code calls into the managers and
//! renders whatever they return.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    account::{Account, Session},
    auth::{AuthManager, SESSION_KEY, USERS_KEY},
    autosave::{AutosaveTimer, DEFAULT_QUIET_PERIOD},
    error::{Result, ShoalnotesError},
    note::{Note, NotePatch},
    notes::{notes_key, NoteStore},
    storage::{shared, FileStore, KeyValueStore, MemoryStore, SharedStore},
};
