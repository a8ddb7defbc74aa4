use super::*;
use crate::util::storage::MemoryStore;

fn make_user(nickname: Option<&str>) -> User {
    User {
        id: "u-1".to_owned(),
        email: Some("minji@example.com".to_owned()),
        nickname: nickname.map(str::to_owned),
        ..User::default()
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn empty_store_loads_absent_session() {
    let session = SessionStore::new(MemoryStore::new());
    let snapshot = session.load();
    assert_eq!(snapshot, SessionSnapshot::default());
    assert!(!snapshot.is_present());
}

#[test]
fn corrupted_user_record_loads_as_absent() {
    let session = SessionStore::new(MemoryStore::new());
    session.store().set(TOKEN_KEY, "abc");
    session.store().set(USER_KEY, "{\"nickname\": ");
    let snapshot = session.load();
    assert_eq!(snapshot.token.as_deref(), Some("abc"));
    assert!(snapshot.user.is_none());
    assert!(!snapshot.is_present());
}

#[test]
fn blank_token_loads_as_absent() {
    let session = SessionStore::new(MemoryStore::new());
    session.store().set(TOKEN_KEY, "  ");
    assert_eq!(session.load().token, None);
}

// =============================================================
// lifecycle
// =============================================================

#[test]
fn save_login_writes_token_and_user_together() {
    let session = SessionStore::new(MemoryStore::new());
    session.save_login("abc", &make_user(Some("minji")));
    let snapshot = session.load();
    assert!(snapshot.is_present());
    assert!(snapshot.is_onboarded());
    assert_eq!(snapshot.token.as_deref(), Some("abc"));
}

#[test]
fn save_login_discards_signup_draft() {
    let session = SessionStore::new(MemoryStore::new());
    session.save_signup_draft(&SignupDraft { email: "minji@example.com".to_owned() });
    session.save_login("abc", &make_user(None));
    assert!(session.load_signup_draft().is_none());
}

#[test]
fn save_user_keeps_token() {
    let session = SessionStore::new(MemoryStore::new());
    session.save_login("abc", &make_user(None));
    assert!(!session.load().is_onboarded());

    session.save_user(&make_user(Some("minji")));
    let snapshot = session.load();
    assert_eq!(snapshot.token.as_deref(), Some("abc"));
    assert!(snapshot.is_onboarded());
}

#[test]
fn clear_removes_every_session_key_and_is_idempotent() {
    let session = SessionStore::new(MemoryStore::new());
    session.save_login("abc", &make_user(Some("minji")));
    session.save_signup_draft(&SignupDraft { email: "x@y.z".to_owned() });
    session.store().set(crate::config::LIST_FILTERS_KEY, "{}");

    session.clear();
    session.clear();

    assert_eq!(session.load(), SessionSnapshot::default());
    assert!(session.load_signup_draft().is_none());
    // Filters are not session state.
    assert_eq!(session.store().len(), 1);
}

#[test]
fn signup_draft_round_trips() {
    let session = SessionStore::new(MemoryStore::new());
    let draft = SignupDraft { email: "minji@example.com".to_owned() };
    session.save_signup_draft(&draft);
    assert_eq!(session.load_signup_draft(), Some(draft));
}

#[test]
fn peek_reads_storage_without_writing_the_signal() {
    // Signals need a reactive owner when leptos' sandboxed arenas are enabled (ssr builds).
    leptos::prelude::Owner::new().with(|| {
        let session = SessionContext::new();
        let cached = SessionSnapshot { token: Some("tok".to_owned()), user: Some(make_user(Some("kim"))) };
        session.state().set(cached.clone());

        // Browser storage is absent in native builds, so the read comes back empty.
        assert_eq!(session.peek(), SessionSnapshot::default());
        assert_eq!(session.state().get_untracked(), cached);
    });
}
