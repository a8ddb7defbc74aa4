use super::*;

#[test]
fn parse_callback_returns_trimmed_code() {
    assert_eq!(parse_callback(Some(" abc "), None, None), Ok("abc".to_owned()));
}

#[test]
fn parse_callback_requires_code() {
    assert_eq!(parse_callback(None, None, None), Err("Missing authorization code.".to_owned()));
    assert_eq!(parse_callback(Some("  "), None, None), Err("Missing authorization code.".to_owned()));
}

#[test]
fn parse_callback_error_wins_over_code() {
    let err = parse_callback(Some("abc"), Some("access_denied"), None).unwrap_err();
    assert!(err.ends_with("access_denied"));
}

#[test]
fn parse_callback_prefers_error_description() {
    let err = parse_callback(None, Some("access_denied"), Some("User denied access")).unwrap_err();
    assert!(err.ends_with("User denied access"));
}

#[test]
fn parse_callback_ignores_blank_error() {
    assert_eq!(parse_callback(Some("abc"), Some(" "), None), Ok("abc".to_owned()));
}
