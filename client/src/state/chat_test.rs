use super::*;

fn make_session(id: &str) -> ChatSession {
    ChatSession { id: id.to_owned(), title: None, created_at: None, updated_at: None }
}

fn assistant(content: &str, rec: Option<CourseRecommendation>) -> ChatMessage {
    ChatMessage {
        id: "m-2".to_owned(),
        role: ChatRole::Assistant,
        content: content.to_owned(),
        recommendation: rec,
        created_at: None,
    }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty() {
    let state = ChatState::default();
    assert!(state.sessions.is_empty());
    assert!(state.messages.is_empty());
    assert!(state.active_id.is_none());
    assert!(!state.sending);
}

// =============================================================
// Sessions
// =============================================================

#[test]
fn add_session_activates_and_prepends() {
    let mut state = ChatState::default();
    state.set_sessions(vec![make_session("a")]);
    state.add_session(make_session("b"));
    assert_eq!(state.active_id.as_deref(), Some("b"));
    assert_eq!(state.sessions[0].id, "b");
    assert_eq!(state.sessions.len(), 2);
}

#[test]
fn set_sessions_drops_missing_active_session() {
    let mut state = ChatState::default();
    state.add_session(make_session("gone"));
    state.messages.push(assistant("hi", None));
    state.set_sessions(vec![make_session("other")]);
    assert!(state.active_id.is_none());
    assert!(state.messages.is_empty());
}

#[test]
fn remove_active_session_clears_thread() {
    let mut state = ChatState::default();
    state.add_session(make_session("a"));
    state.messages.push(assistant("hi", None));
    state.remove_session("a");
    assert!(state.sessions.is_empty());
    assert!(state.active_id.is_none());
    assert!(state.messages.is_empty());
}

#[test]
fn open_loads_messages_and_updates_title() {
    let mut state = ChatState { loading: true, ..ChatState::default() };
    state.set_sessions(vec![make_session("a")]);
    state.open(ChatSessionDetail {
        id: "a".to_owned(),
        title: Some("Weekend in Busan".to_owned()),
        messages: vec![assistant("hello", None)],
    });
    assert_eq!(state.active_id.as_deref(), Some("a"));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.sessions[0].display_title(), "Weekend in Busan");
    assert!(!state.loading);
}

// =============================================================
// Sending
// =============================================================

#[test]
fn pending_message_is_confirmed_by_reply() {
    let mut state = ChatState::default();
    let pending = state.push_pending("Plan a rainy day date");
    assert!(state.sending);
    assert!(ChatState::is_pending(&state.messages[0]));

    state.apply_reply(&pending, assistant("Try this", None));
    assert!(!state.sending);
    assert_eq!(state.messages.len(), 2);
    assert!(!ChatState::is_pending(&state.messages[0]));
    assert_eq!(state.messages[0].content, "Plan a rainy day date");
}

#[test]
fn failed_send_removes_pending_message() {
    let mut state = ChatState::default();
    let pending = state.push_pending("hello");
    state.fail_pending(&pending);
    assert!(state.messages.is_empty());
    assert!(!state.sending);
}

#[test]
fn latest_recommendation_prefers_newest() {
    let mut state = ChatState::default();
    let first = CourseRecommendation { title: "First".to_owned(), ..CourseRecommendation::default() };
    let second = CourseRecommendation { title: "Second".to_owned(), ..CourseRecommendation::default() };
    state.messages.push(assistant("a", Some(first)));
    state.messages.push(assistant("b", Some(second)));
    state.messages.push(assistant("c", None));
    assert_eq!(state.latest_recommendation().map(|r| r.title.as_str()), Some("Second"));
}
