//! Debounced autosave for the note editor.
//!
//! The editor stages edits here instead of writing on every keystroke; once a
//! quiet period passes with no further edits, the staged patch is flushed
//! into [`NoteStore::update_note`]. At most one edit is pending at a time:
//! re-editing the same note supersedes the staged patch and restarts the
//! countdown, while editing a different note (or cancelling) drops the
//! pending task without firing. Everything runs on the caller's thread; the
//! presentation layer's event loop calls [`AutosaveTimer::flush_due`] on its
//! ticks.

use crate::core::note::NotePatch;
use crate::core::notes::NoteStore;
use std::time::{Duration, Instant};

/// Quiet period the note editor uses between the last keystroke and the save.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
struct PendingEdit {
    note_id: String,
    patch: NotePatch,
    deadline: Instant,
}

/// A single-threaded debounce timer holding at most one pending edit.
#[derive(Debug)]
pub struct AutosaveTimer {
    quiet_period: Duration,
    pending: Option<PendingEdit>,
}

impl AutosaveTimer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Stages `patch` for `note_id` and restarts the countdown.
    ///
    /// An edit for the note already pending merges over the staged patch
    /// field by field, so a staged title edit survives a later body-only
    /// edit. An edit for any other note replaces the pending task entirely,
    /// cancelling the old one without firing.
    pub fn record_edit(&mut self, note_id: &str, patch: NotePatch) {
        let deadline = Instant::now() + self.quiet_period;
        match &mut self.pending {
            Some(pending) if pending.note_id == note_id => {
                if patch.title.is_some() {
                    pending.patch.title = patch.title;
                }
                if patch.body.is_some() {
                    pending.patch.body = patch.body;
                }
                pending.deadline = deadline;
            }
            _ => {
                self.pending = Some(PendingEdit {
                    note_id: note_id.to_string(),
                    patch,
                    deadline,
                });
            }
        }
    }

    /// Drops any pending edit without applying it. Used when the selection
    /// changes or the editor is torn down without saving.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether an edit is staged and waiting for its quiet period.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The note the pending edit targets, if any.
    pub fn pending_note_id(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.note_id.as_str())
    }

    /// Applies the pending edit if its quiet period has elapsed.
    ///
    /// Returns whether an edit was flushed.
    pub fn flush_due(&mut self, notes: &mut NoteStore) -> bool {
        let due = self
            .pending
            .as_ref()
            .map_or(false, |p| Instant::now() >= p.deadline);
        if due {
            self.flush_now(notes)
        } else {
            false
        }
    }

    /// Applies the pending edit immediately, regardless of the deadline.
    ///
    /// Returns whether an edit was flushed.
    pub fn flush_now(&mut self, notes: &mut NoteStore) -> bool {
        match self.pending.take() {
            Some(pending) => {
                notes.update_note(&pending.note_id, &pending.patch);
                true
            }
            None => false,
        }
    }
}

impl Default for AutosaveTimer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
