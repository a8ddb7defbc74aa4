use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes_and_whitespace() {
    assert_eq!(normalize_base_url(" https://api.example.test/v1// "), "https://api.example.test/v1");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}

#[test]
fn session_keys_cover_token_user_and_draft() {
    assert!(SESSION_KEYS.contains(&TOKEN_KEY));
    assert!(SESSION_KEYS.contains(&USER_KEY));
    assert!(SESSION_KEYS.contains(&SIGNUP_DRAFT_KEY));
    assert!(!SESSION_KEYS.contains(&LIST_FILTERS_KEY));
}
