//! Note collection management for the authenticated identity.
//!
//! [`NoteStore`] owns the in-memory note list of one owner identity plus the
//! transient selection. Every mutation rewrites the owner's whole list as a
//! single JSON blob under an owner-scoped key; lists for different owners
//! never share a key. Unknown-id updates and deletes are silent no-ops, and
//! unreadable persisted data loads as an empty list.

use crate::core::note::{Note, NotePatch};
use crate::core::storage::SharedStore;
use chrono::Utc;
use log::{debug, error, warn};

/// Returns the persistence key for `owner_id`'s note list.
pub fn notes_key(owner_id: &str) -> String {
    format!("notes_app_notes_{owner_id}")
}

/// Owns the note list of the current owner identity.
///
/// The store is parameterized by an optional owner; switching owners clears
/// the in-memory list and selection and reloads from the new owner's
/// persisted list. Without an owner the list starts empty and mutations stay
/// in memory only — nothing survives a reload.
pub struct NoteStore {
    store: SharedStore,
    owner_id: Option<String>,
    notes: Vec<Note>,
    selected_id: Option<String>,
}

impl NoteStore {
    /// Opens a store with no owner: empty list, no selection.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            owner_id: None,
            notes: Vec::new(),
            selected_id: None,
        }
    }

    /// Opens a store and immediately loads `owner_id`'s notes.
    pub fn for_owner(store: SharedStore, owner_id: &str) -> Self {
        let mut notes = Self::new(store);
        notes.set_owner(Some(owner_id));
        notes
    }

    /// Switches the owning identity.
    ///
    /// Always clears the in-memory list and selection first, then loads the
    /// new owner's persisted list. Missing or corrupt data loads as empty.
    pub fn set_owner(&mut self, owner_id: Option<&str>) {
        self.notes.clear();
        self.selected_id = None;
        self.owner_id = owner_id.map(str::to_string);
        if let Some(owner) = &self.owner_id {
            self.notes = self.load_notes(owner);
            debug!("loaded {} notes for owner {owner}", self.notes.len());
        }
    }

    /// Returns the current owner identity, if any.
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Returns the notes in list order, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the currently selected note, if any.
    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_id.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    /// Creates a note, prepends it to the list (newest first), persists, and
    /// selects it. `None` arguments fall back to the `"Untitled"` title and an
    /// empty body.
    pub fn create_note(&mut self, title: Option<&str>, body: Option<&str>) -> Note {
        let note = Note::new(title.unwrap_or("Untitled"), body.unwrap_or(""));
        self.notes.insert(0, note.clone());
        self.persist();
        self.selected_id = Some(note.id.clone());
        note
    }

    /// Merges `patch` into the note with `id` and refreshes its `updated_at`.
    ///
    /// Unknown ids are a silent no-op. List order is preserved, and a
    /// selected note stays selected through the update.
    pub fn update_note(&mut self, id: &str, patch: &NotePatch) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            patch.apply_to(note);
            note.updated_at = Utc::now();
        } else {
            return;
        }
        self.persist();
    }

    /// Removes the note with `id`; unknown ids are a silent no-op.
    ///
    /// When the deleted note was selected, selection moves to the first
    /// remaining note, or clears if the list is now empty.
    pub fn delete_note(&mut self, id: &str) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return;
        }
        self.persist();
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = self.notes.first().map(|n| n.id.clone());
        }
    }

    /// Selects the note with `id`.
    ///
    /// Ids not present in the current owner's list are rejected: the call
    /// returns `false` and the selection is unchanged.
    pub fn select_note(&mut self, id: &str) -> bool {
        if self.notes.iter().any(|n| n.id == id) {
            self.selected_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Case-insensitive substring search over title and body.
    ///
    /// An empty query matches every note. List order is preserved; nothing is
    /// mutated.
    pub fn search_notes(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.body.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn load_notes(&self, owner_id: &str) -> Vec<Note> {
        let raw = match self.store.borrow().get(&notes_key(owner_id)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read notes for owner {owner_id}: {e}");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("failed to parse notes for owner {owner_id}, treating as empty: {e}");
            Vec::new()
        })
    }

    fn persist(&self) {
        let owner = match &self.owner_id {
            Some(owner) => owner,
            None => return,
        };
        match serde_json::to_string(&self.notes) {
            Ok(json) => {
                if let Err(e) = self.store.borrow_mut().set(&notes_key(owner), &json) {
                    error!("failed to persist notes for owner {owner}: {e}");
                }
            }
            Err(e) => error!("failed to serialize notes for owner {owner}: {e}"),
        }
    }
}
