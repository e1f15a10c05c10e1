//! End-to-end flows across both state containers: sign up, log in, work on
//! notes scoped to the session identity, restart, switch users.

use shoalnotes_core::{
    shared, AuthManager, FileStore, MemoryStore, NotePatch, NoteStore, SharedStore,
};
use tempfile::tempdir;

fn memory_store() -> SharedStore {
    shared(MemoryStore::new())
}

#[test]
fn signup_login_and_note_ownership() {
    let store = memory_store();
    let mut auth = AuthManager::new(store.clone());

    assert!(auth.signup("alice", "alice@example.com", "pw-a"));
    assert!(auth.signup("bob", "bob@example.com", "pw-b"));

    // Alice logs in and writes a note under her identity.
    assert!(auth.login("alice", "pw-a"));
    let alice_id = auth.session().unwrap().id.clone();
    let mut notes = NoteStore::for_owner(store.clone(), &alice_id);
    notes.create_note(Some("alice's plan"), Some("secret"));

    // Bob takes over the session; his list must not contain Alice's note.
    auth.logout();
    assert!(auth.login("bob", "pw-b"));
    let bob_id = auth.session().unwrap().id.clone();
    assert_ne!(alice_id, bob_id);
    notes.set_owner(Some(&bob_id));
    assert!(notes.notes().is_empty());

    // And Alice's note is still there when she comes back.
    notes.set_owner(Some(&alice_id));
    assert_eq!(notes.notes().len(), 1);
    assert_eq!(notes.notes()[0].title, "alice's plan");
}

#[test]
fn full_state_survives_process_restart_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shoalnotes.json");

    let (owner_id, created) = {
        let store = shared(FileStore::open(&path).unwrap());
        let mut auth = AuthManager::new(store.clone());
        assert!(auth.signup("carol", "carol@example.com", "pw-c"));
        assert!(auth.login("carol", "pw-c"));
        let owner_id = auth.session().unwrap().id.clone();

        let mut notes = NoteStore::for_owner(store, &owner_id);
        let note = notes.create_note(Some("persisted"), Some("across restarts"));
        notes.update_note(&note.id, &NotePatch::new().body("and updated"));
        (owner_id, notes.notes().to_vec())
    };

    // "Restart": everything is rebuilt from the snapshot file.
    let store = shared(FileStore::open(&path).unwrap());
    let auth = AuthManager::new(store.clone());
    let session = auth.session().expect("session survives restart");
    assert_eq!(session.username, "carol");
    assert_eq!(session.id, owner_id);

    let notes = NoteStore::for_owner(store, &owner_id);
    assert_eq!(notes.notes(), &created[..], "notes round-trip with equal dates");
}

#[test]
fn logout_leaves_notes_on_disk_but_clears_session() {
    let store = memory_store();
    let mut auth = AuthManager::new(store.clone());
    assert!(auth.signup("dave", "dave@example.com", "pw-d"));
    assert!(auth.login("dave", "pw-d"));
    let owner_id = auth.session().unwrap().id.clone();

    let mut notes = NoteStore::for_owner(store.clone(), &owner_id);
    notes.create_note(Some("kept"), None);

    auth.logout();
    notes.set_owner(None);
    assert!(notes.notes().is_empty());

    // Logging back in finds the list untouched.
    assert!(auth.login("dave", "pw-d"));
    notes.set_owner(Some(&owner_id));
    assert_eq!(notes.notes().len(), 1);
}
