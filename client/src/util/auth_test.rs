use super::*;
use crate::net::types::User;

fn session(token: Option<&str>, nickname: Option<&str>) -> SessionSnapshot {
    SessionSnapshot {
        token: token.map(str::to_owned),
        user: Some(User { id: "u-1".to_owned(), nickname: nickname.map(str::to_owned), ..User::default() }),
    }
}

fn no_session() -> SessionSnapshot {
    SessionSnapshot::default()
}

const PROTECTED_PATHS: [&str; 7] = ["/", "/course", "/list", "/list/7", "/couple", "/mypage", "/my-courses"];

// =============================================================
// Concrete scenarios
// =============================================================

#[test]
fn no_session_on_protected_path_resets_and_redirects_to_login() {
    let decision = evaluate("/list", &no_session());
    assert_eq!(decision, GuardDecision::ResetAndRedirect("/login"));
    assert!(decision.clears_session());
}

#[test]
fn empty_nickname_redirects_to_profile_completion() {
    assert_eq!(evaluate("/course", &session(Some("abc"), Some(""))), GuardDecision::Redirect("/signup"));
}

#[test]
fn onboarded_user_on_signup_goes_to_landing() {
    assert_eq!(evaluate("/signup", &session(Some("abc"), Some("minji"))), GuardDecision::Redirect("/course"));
}

#[test]
fn onboarded_user_on_login_goes_to_landing() {
    assert_eq!(evaluate("/login", &session(Some("abc"), Some("minji"))), GuardDecision::Redirect("/course"));
}

#[test]
fn no_session_on_login_renders() {
    assert_eq!(evaluate("/login", &no_session()), GuardDecision::Render);
}

#[test]
fn root_with_session_redirects_to_landing() {
    assert_eq!(evaluate("/", &session(Some("abc"), Some("minji"))), GuardDecision::Redirect("/course"));
}

// =============================================================
// Properties
// =============================================================

#[test]
fn open_paths_other_than_login_render_without_session() {
    for path in ["/signup", "/oauth/callback"] {
        assert_eq!(evaluate(path, &no_session()), GuardDecision::Render, "{path}");
        assert_eq!(evaluate(path, &session(None, Some("minji"))), GuardDecision::Render, "{path}");
    }
}

#[test]
fn oauth_callback_renders_for_any_session() {
    for snapshot in [no_session(), session(Some("abc"), None), session(Some("abc"), Some("minji"))] {
        assert_eq!(evaluate("/oauth/callback", &snapshot), GuardDecision::Render);
    }
}

#[test]
fn profile_completion_renders_for_user_without_nickname() {
    assert_eq!(evaluate("/signup", &session(Some("abc"), None)), GuardDecision::Render);
}

#[test]
fn login_with_incomplete_profile_goes_to_profile_completion() {
    assert_eq!(evaluate("/login", &session(Some("abc"), Some("  "))), GuardDecision::Redirect("/signup"));
}

#[test]
fn missing_token_or_user_resets_on_every_protected_path() {
    let token_only = SessionSnapshot { token: Some("abc".to_owned()), user: None };
    let user_only = session(None, Some("minji"));
    for path in PROTECTED_PATHS {
        for snapshot in [no_session(), token_only.clone(), user_only.clone()] {
            assert_eq!(evaluate(path, &snapshot), GuardDecision::ResetAndRedirect("/login"), "{path}");
        }
    }
}

#[test]
fn missing_nickname_redirects_every_non_signup_protected_path() {
    for path in PROTECTED_PATHS.iter().filter(|p| **p != "/") {
        assert_eq!(evaluate(path, &session(Some("abc"), None)), GuardDecision::Redirect("/signup"), "{path}");
    }
}

#[test]
fn root_precedes_nickname_check() {
    // Root is a pure redirect point even before onboarding; the landing page
    // then forwards to profile completion.
    let snapshot = session(Some("abc"), None);
    assert_eq!(evaluate("/", &snapshot), GuardDecision::Redirect("/course"));
    assert_eq!(evaluate("/course", &snapshot), GuardDecision::Redirect("/signup"));
}

#[test]
fn onboarded_user_renders_protected_pages() {
    for path in PROTECTED_PATHS.iter().filter(|p| **p != "/") {
        assert_eq!(evaluate(path, &session(Some("abc"), Some("minji"))), GuardDecision::Render, "{path}");
    }
}

#[test]
fn evaluation_is_idempotent() {
    let snapshots = [no_session(), session(Some("abc"), None), session(Some("abc"), Some("minji"))];
    for snapshot in &snapshots {
        for path in PROTECTED_PATHS.iter().chain(OPEN_PATHS.iter()) {
            assert_eq!(evaluate(path, snapshot), evaluate(path, snapshot));
        }
    }
}

#[test]
fn redirect_targets_are_stable_for_same_session() {
    // Following a redirect never leads back to the page that issued it.
    let snapshots = [session(Some("abc"), None), session(Some("abc"), Some("minji"))];
    for snapshot in &snapshots {
        for path in PROTECTED_PATHS.iter().chain(OPEN_PATHS.iter()) {
            if let Some(target) = evaluate(path, snapshot).target() {
                let next = evaluate(target, snapshot);
                assert_ne!(next.target(), Some(*path), "{path} -> {target}");
            }
        }
    }
}

// =============================================================
// Path normalization + status
// =============================================================

#[test]
fn normalize_path_strips_trailing_slash_query_and_fragment() {
    assert_eq!(normalize_path("/course/"), "/course");
    assert_eq!(normalize_path("/oauth/callback?code=xyz"), "/oauth/callback");
    assert_eq!(normalize_path("/list#top"), "/list");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("///"), "/");
}

#[test]
fn trailing_slash_on_open_path_is_still_open() {
    assert!(is_open_path("/login/"));
    assert_eq!(evaluate("/signup/", &no_session()), GuardDecision::Render);
}

#[test]
fn guard_status_follows_decision() {
    assert_eq!(GuardStatus::default(), GuardStatus::Loading);
    assert_eq!(GuardStatus::from_decision(GuardDecision::Render), GuardStatus::Authenticated);
    assert_eq!(GuardStatus::from_decision(GuardDecision::Redirect("/course")), GuardStatus::Redirecting);
}

#[test]
fn reset_shows_redirect_placeholder() {
    let decision = evaluate("/course", &no_session());
    assert_eq!(decision, GuardDecision::ResetAndRedirect("/login"));
    assert_eq!(GuardStatus::from_decision(decision), GuardStatus::Redirecting);
}
