//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGuard` calls `evaluate` on every path change with a freshly loaded
//! session snapshot, before the routed page mounts. The decision is pure; the
//! component performs the side effects (session reset, navigation). Rules
//! apply in order and the first match wins:
//!
//! 1. open path: a present session on `/login` is sent to its onboarding
//!    target, and an onboarded session on `/signup` to the landing page;
//!    everything else renders (the OAuth callback always does)
//! 2. missing token or user: reset the session and go to `/login`
//! 3. `/`: go to the default landing page
//! 4. no nickname, not on `/signup`: go to `/signup`
//! 5. render

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::{DEFAULT_LANDING_PATH, LOGIN_PATH, OAUTH_CALLBACK_PATH, ROOT_PATH, SIGNUP_PATH};
use crate::state::session::SessionSnapshot;

/// Routes reachable without a session.
pub const OPEN_PATHS: [&str; 3] = [LOGIN_PATH, SIGNUP_PATH, OAUTH_CALLBACK_PATH];

/// What the guard should do for one (path, session) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page.
    Render,
    /// Navigate elsewhere, keeping the session.
    Redirect(&'static str),
    /// Clear every session key, then navigate to login.
    ResetAndRedirect(&'static str),
}

impl GuardDecision {
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::Redirect(to) | Self::ResetAndRedirect(to) => Some(to),
        }
    }

    pub fn clears_session(self) -> bool {
        matches!(self, Self::ResetAndRedirect(_))
    }
}

/// Rendering state of the guard component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardStatus {
    /// Before the first client-side check; also what SSR renders.
    #[default]
    Loading,
    Authenticated,
    Redirecting,
    /// Empty terminal state. No decision maps here; redirects show the
    /// placeholder instead.
    Unauthenticated,
}

impl GuardStatus {
    pub fn from_decision(decision: GuardDecision) -> Self {
        match decision {
            GuardDecision::Render => Self::Authenticated,
            GuardDecision::Redirect(_) | GuardDecision::ResetAndRedirect(_) => Self::Redirecting,
        }
    }
}

/// Strip a trailing slash (except on the root) and any query or fragment.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() {
        return ROOT_PATH;
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}

pub fn is_open_path(path: &str) -> bool {
    OPEN_PATHS.contains(&normalize_path(path))
}

/// Decide the guard outcome for `path` given the cached session.
pub fn evaluate(path: &str, session: &SessionSnapshot) -> GuardDecision {
    let path = normalize_path(path);

    if is_open_path(path) {
        if session.is_present() && path != OAUTH_CALLBACK_PATH {
            let target = onboarding_target(session);
            if target != path {
                return GuardDecision::Redirect(target);
            }
        }
        return GuardDecision::Render;
    }

    if !session.is_present() {
        return GuardDecision::ResetAndRedirect(LOGIN_PATH);
    }

    if path == ROOT_PATH {
        return GuardDecision::Redirect(DEFAULT_LANDING_PATH);
    }

    if !session.is_onboarded() {
        return GuardDecision::Redirect(SIGNUP_PATH);
    }

    GuardDecision::Render
}

/// Where a signed-in user belongs: the landing page once onboarded,
/// profile completion before that.
pub fn onboarding_target(session: &SessionSnapshot) -> &'static str {
    if session.is_onboarded() { DEFAULT_LANDING_PATH } else { SIGNUP_PATH }
}
