//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session (bearer token + cached user record) is persisted in
//! localStorage and mirrored in a reactive signal. `SessionContext` is the
//! only writer of the session keys: login stores token and user together,
//! profile edits replace the user only, and `clear` removes every session
//! key at once. The route guard reads a fresh `SessionSnapshot` on each
//! navigation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{SESSION_KEYS, SIGNUP_DRAFT_KEY, TOKEN_KEY, USER_KEY};
use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::util::storage::{KeyValueStore, LocalStorage, load_json, save_json};

/// Point-in-time view of the persisted session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionSnapshot {
    /// Token and user both present. Neither is trusted alone.
    pub fn is_present(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_onboarded(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_onboarded)
    }
}

/// First signup step kept across reloads. Never holds the password.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupDraft {
    pub email: String,
}

/// Storage-backed session operations, generic over the backing store.
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted session. Empty tokens and unreadable user records
    /// are reported as absent.
    pub fn load(&self) -> SessionSnapshot {
        let token = self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let user = load_json::<S, User>(&self.store, USER_KEY);
        SessionSnapshot { token, user }
    }

    /// Persist a completed login. Clears any signup draft.
    pub fn save_login(&self, token: &str, user: &User) {
        self.store.set(TOKEN_KEY, token);
        save_json(&self.store, USER_KEY, user);
        self.store.remove(SIGNUP_DRAFT_KEY);
    }

    /// Replace the cached user after a profile change; the token is untouched.
    pub fn save_user(&self, user: &User) {
        save_json(&self.store, USER_KEY, user);
    }

    /// Remove every session key. Safe to call repeatedly.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
    }

    pub fn load_signup_draft(&self) -> Option<SignupDraft> {
        load_json(&self.store, SIGNUP_DRAFT_KEY)
    }

    pub fn save_signup_draft(&self, draft: &SignupDraft) {
        save_json(&self.store, SIGNUP_DRAFT_KEY, draft);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Reactive session shared through Leptos context.
///
/// Pages read `state` for rendering; all writes go through the methods here
/// so storage and the signal never disagree.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    state: RwSignal<SessionSnapshot>,
}

impl SessionContext {
    /// Create the context. Starts empty; `refresh` loads storage on the client.
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionSnapshot::default()) }
    }

    fn store() -> SessionStore<LocalStorage> {
        SessionStore::new(LocalStorage)
    }

    /// Re-read storage into the signal and return the fresh snapshot.
    pub fn refresh(&self) -> SessionSnapshot {
        let snapshot = Self::store().load();
        if self.state.get_untracked() != snapshot {
            self.state.set(snapshot.clone());
        }
        snapshot
    }

    /// Read storage without touching the signal. Safe inside memos.
    pub fn peek(&self) -> SessionSnapshot {
        Self::store().load()
    }

    pub fn state(&self) -> RwSignal<SessionSnapshot> {
        self.state
    }

    pub fn user(&self) -> Option<User> {
        self.state.get().user
    }

    pub fn login(&self, token: &str, user: User) {
        Self::store().save_login(token, &user);
        self.state.set(SessionSnapshot { token: Some(token.to_owned()), user: Some(user) });
    }

    pub fn update_user(&self, user: User) {
        Self::store().save_user(&user);
        self.state.update(|s| s.user = Some(user));
    }

    pub fn clear(&self) {
        Self::store().clear();
        self.state.set(SessionSnapshot::default());
    }

    pub fn signup_draft(&self) -> Option<SignupDraft> {
        Self::store().load_signup_draft()
    }

    pub fn save_signup_draft(&self, draft: &SignupDraft) {
        Self::store().save_signup_draft(draft);
    }

    /// API handle carrying the current token.
    pub fn api(&self) -> ApiClient {
        ApiClient::with_token(self.state.get_untracked().token)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
