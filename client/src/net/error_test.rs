use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_401_requires_reauth() {
    let err = ApiError::from_status(401, r#"{"message": "token expired"}"#);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.requires_reauth());
}

#[test]
fn status_403_keeps_body_message() {
    let err = ApiError::from_status(403, r#"{"detail": "Not your course"}"#);
    assert_eq!(err, ApiError::Forbidden(Some("Not your course".to_owned())));
    assert_eq!(err.to_string(), "Not your course");
}

#[test]
fn status_404_without_body_uses_generic_message() {
    let err = ApiError::from_status(404, "");
    assert_eq!(err.to_string(), "The requested item could not be found.");
}

#[test]
fn server_errors_are_transient_category() {
    for status in [500, 502, 503] {
        let err = ApiError::from_status(status, "<html>bad gateway</html>");
        assert_eq!(err, ApiError::Server { status });
        assert!(!err.requires_reauth());
    }
}

#[test]
fn other_status_uses_backend_message() {
    let err = ApiError::from_status(400, r#"{"message": "Not enough credits"}"#);
    assert_eq!(err.to_string(), "Not enough credits");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn other_status_without_message_formats_status() {
    let err = ApiError::from_status(409, "");
    assert_eq!(err.to_string(), "Request failed (409).");
}

#[test]
fn transport_errors_have_no_status() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}

// =============================================================
// Message extraction
// =============================================================

#[test]
fn extract_message_reads_fastapi_validation_list() {
    let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "invalid email"}]}"#;
    assert_eq!(extract_message(body).as_deref(), Some("invalid email"));
}

#[test]
fn extract_message_prefers_message_over_error() {
    let body = r#"{"error": "bad_request", "message": "Nickname taken"}"#;
    assert_eq!(extract_message(body).as_deref(), Some("Nickname taken"));
}

#[test]
fn extract_message_ignores_json_without_known_fields() {
    assert_eq!(extract_message(r#"{"code": 17}"#), None);
}

#[test]
fn extract_message_accepts_short_plain_text() {
    assert_eq!(extract_message("  nickname taken \n").as_deref(), Some("nickname taken"));
}

#[test]
fn extract_message_rejects_html_and_long_text() {
    assert_eq!(extract_message("<!doctype html><p>oops</p>"), None);
    assert_eq!(extract_message(&"x".repeat(500)), None);
}
