//! Build-time configuration, route paths, and storage keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so the API location is baked in
//! at compile time. Routes and storage keys live here so the guard, session
//! store, and pages agree on a single set of names.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const OAUTH_CALLBACK_PATH: &str = "/oauth/callback";
pub const ROOT_PATH: &str = "/";
/// Landing page for onboarded users. There is no authenticated home at `/`.
pub const DEFAULT_LANDING_PATH: &str = "/course";

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const SIGNUP_DRAFT_KEY: &str = "signup_draft";
pub const LIST_FILTERS_KEY: &str = "list_filters";

/// Every key owned by the session lifecycle. Cleared together.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_KEY, SIGNUP_DRAFT_KEY];

/// Base URL of the REST backend, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("DATECOURSE_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Browser-facing URL that starts the Kakao OAuth flow.
pub fn kakao_authorize_url() -> String {
    option_env!("DATECOURSE_KAKAO_AUTHORIZE_URL").map_or_else(
        || format!("{}/auth/oauth/kakao/authorize", api_base_url()),
        str::to_owned,
    )
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
