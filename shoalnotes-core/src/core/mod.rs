//! Internal domain modules for the Shoalnotes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod account;
pub mod auth;
pub mod autosave;
pub mod error;
pub mod note;
pub mod notes;
pub mod storage;

#[doc(inline)]
pub use account::{Account, Session};
#[doc(inline)]
pub use auth::AuthManager;
#[doc(inline)]
pub use autosave::AutosaveTimer;
#[doc(inline)]
pub use error::{Result, ShoalnotesError};
#[doc(inline)]
pub use note::{Note, NotePatch};
#[doc(inline)]
pub use notes::NoteStore;
#[doc(inline)]
pub use storage::{FileStore, KeyValueStore, MemoryStore, SharedStore};
