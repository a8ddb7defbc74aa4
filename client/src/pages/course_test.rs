use super::*;
use crate::net::types::ChatMessage;

fn response(balance: Option<i64>, with_course: bool) -> SendMessageResponse {
    SendMessageResponse {
        reply: ChatMessage {
            id: "m-1".to_owned(),
            role: ChatRole::Assistant,
            content: "How about this?".to_owned(),
            recommendation: with_course.then(CourseRecommendation::default),
            created_at: None,
        },
        balance,
    }
}

#[test]
fn validate_prompt_trims_and_requires_text() {
    assert_eq!(validate_prompt("  cafe date in Seongsu  "), Ok("cafe date in Seongsu".to_owned()));
    assert_eq!(validate_prompt(" \n "), Err("Describe the date you have in mind."));
}

#[test]
fn validate_prompt_limits_length_in_chars() {
    assert!(validate_prompt(&"가".repeat(MAX_PROMPT_CHARS)).is_ok());
    assert_eq!(
        validate_prompt(&"a".repeat(MAX_PROMPT_CHARS + 1)),
        Err("Keep the request under 1,000 characters.")
    );
}

#[test]
fn client_charges_only_unbilled_generations() {
    assert!(needs_client_charge(&response(None, true)));
    assert!(!needs_client_charge(&response(Some(900), true)));
    assert!(!needs_client_charge(&response(None, false)));
}
