//! State for the AI course-recommendation chat.
//!
//! DESIGN
//! ======
//! The backend owns chat history; this state is a view of the active session
//! plus optimistic user turns that are reconciled when the reply arrives.
//! Replies are applied in arrival order without checking which send they
//! answer.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatMessage, ChatRole, ChatSession, ChatSessionDetail, CourseRecommendation};

/// Prefix for client-generated message ids awaiting a server echo.
const PENDING_ID_PREFIX: &str = "pending-";

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub sessions: Vec<ChatSession>,
    pub active_id: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub sending: bool,
}

impl ChatState {
    /// Replace the session list, keeping the active id only if it still exists.
    pub fn set_sessions(&mut self, sessions: Vec<ChatSession>) {
        if let Some(active) = self.active_id.as_deref()
            && !sessions.iter().any(|s| s.id == active)
        {
            self.active_id = None;
            self.messages.clear();
        }
        self.sessions = sessions;
    }

    /// Insert a newly created session at the top and make it active.
    pub fn add_session(&mut self, session: ChatSession) {
        self.sessions.retain(|s| s.id != session.id);
        self.active_id = Some(session.id.clone());
        self.sessions.insert(0, session);
        self.messages.clear();
    }

    pub fn remove_session(&mut self, id: &str) {
        self.sessions.retain(|s| s.id != id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
            self.messages.clear();
        }
    }

    pub fn open(&mut self, detail: ChatSessionDetail) {
        if let Some(title) = detail.title.clone()
            && let Some(session) = self.sessions.iter_mut().find(|s| s.id == detail.id)
        {
            session.title = Some(title);
        }
        self.active_id = Some(detail.id);
        self.messages = detail.messages;
        self.loading = false;
    }

    /// Append the user's turn before the server confirms it.
    pub fn push_pending(&mut self, content: &str) -> String {
        let id = format!("{PENDING_ID_PREFIX}{}", uuid::Uuid::new_v4());
        self.messages.push(ChatMessage {
            id: id.clone(),
            role: ChatRole::User,
            content: content.to_owned(),
            recommendation: None,
            created_at: None,
        });
        self.sending = true;
        id
    }

    /// Confirm a pending turn and append the assistant reply.
    pub fn apply_reply(&mut self, pending_id: &str, reply: ChatMessage) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.id == pending_id) {
            msg.id = pending_id.trim_start_matches(PENDING_ID_PREFIX).to_owned();
        }
        self.messages.push(reply);
        self.sending = false;
    }

    /// Drop a pending turn whose send failed.
    pub fn fail_pending(&mut self, pending_id: &str) {
        self.messages.retain(|m| m.id != pending_id);
        self.sending = false;
    }

    pub fn is_pending(message: &ChatMessage) -> bool {
        message.id.starts_with(PENDING_ID_PREFIX)
    }

    /// Most recent course recommendation in the thread, if any.
    pub fn latest_recommendation(&self) -> Option<&CourseRecommendation> {
        self.messages.iter().rev().find_map(|m| m.recommendation.as_ref())
    }
}
