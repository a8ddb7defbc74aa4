//! REST client for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` because the
//! session token only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError` through `ApiError::from_status`.
//! There is no retry, timeout, or cancellation. Callers surface the error and
//! abandon the operation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::error::ApiError;
use super::types::{
    AuthResponse, Balance, ChatSession, ChatSessionDetail, CoupleInfo, CoupleRequest, Course, CreateCourseRequest,
    CreateReviewRequest, DeductRequest, LoginRequest, OAuthExchangeRequest, ProfileUpdate, PurchaseResponse, Review,
    SendCoupleRequest, SendMessageRequest, SendMessageResponse, ShareCourseRequest, SharedCourse, SignupRequest, User,
};
use crate::state::filters::CourseFilters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Bearer-authenticated handle on the backend.
///
/// Built from the session context per call so a token change is picked up
/// by the next request without any shared mutable client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let token = token.filter(|t| !t.is_empty());
        Self { base_url, token }
    }

    /// Client without credentials, for the open auth endpoints.
    pub fn anonymous() -> Self {
        Self::new(crate::config::api_base_url(), None)
    }

    pub fn with_token(token: Option<String>) -> Self {
        Self::new(crate::config::api_base_url(), token)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::Get, path, None).await
    }

    /// Delete endpoints answer with nothing, `null`, or an ack object; all succeed.
    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<IgnoredAny>(Method::Delete, path, None).await.map(drop)
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::Post, path, None).await
    }

    async fn send<T: DeserializeOwned, B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(method, path, Some(json)).await
    }

    async fn execute<T: DeserializeOwned>(&self, method: Method, path: &str, body: Option<String>) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.endpoint(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            }
            .header("Accept", "application/json");
            if let Some(auth) = self.authorization_header() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match body {
                Some(json) => builder.header("Content-Type", "application/json").body(json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::from_status(status, &text));
            }
            decode_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    // =========================================================================
    // AUTH + USER
    // =========================================================================

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send(Method::Post, "/auth/login", req).await
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.send(Method::Post, "/auth/signup", req).await
    }

    pub async fn exchange_oauth_code(&self, code: &str) -> Result<AuthResponse, ApiError> {
        let req = OAuthExchangeRequest { code: code.to_owned() };
        self.send(Method::Post, "/auth/oauth/kakao", &req).await
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }

    pub async fn update_me(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.send(Method::Patch, "/users/me", update).await
    }

    pub async fn balance(&self) -> Result<Balance, ApiError> {
        self.get("/users/me/balance").await
    }

    pub async fn deduct_balance(&self, req: &DeductRequest) -> Result<Balance, ApiError> {
        self.send(Method::Post, "/users/me/balance/deduct", req).await
    }

    // =========================================================================
    // COURSES
    // =========================================================================

    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get("/courses").await
    }

    pub async fn get_course(&self, id: &str) -> Result<Course, ApiError> {
        self.get(&course_path(id)).await
    }

    pub async fn create_course(&self, req: &CreateCourseRequest) -> Result<Course, ApiError> {
        self.send(Method::Post, "/courses", req).await
    }

    pub async fn delete_course(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&course_path(id)).await
    }

    // =========================================================================
    // CHAT
    // =========================================================================

    pub async fn list_chat_sessions(&self) -> Result<Vec<ChatSession>, ApiError> {
        self.get("/chat/sessions").await
    }

    pub async fn create_chat_session(&self) -> Result<ChatSession, ApiError> {
        self.post_empty("/chat/sessions").await
    }

    pub async fn get_chat_session(&self, id: &str) -> Result<ChatSessionDetail, ApiError> {
        self.get(&chat_session_path(id)).await
    }

    pub async fn send_chat_message(&self, session_id: &str, content: &str) -> Result<SendMessageResponse, ApiError> {
        let req = SendMessageRequest { content: content.to_owned() };
        let path = format!("{}/messages", chat_session_path(session_id));
        self.send(Method::Post, &path, &req).await
    }

    pub async fn delete_chat_session(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&chat_session_path(id)).await
    }

    // =========================================================================
    // MARKETPLACE
    // =========================================================================

    pub async fn list_shared_courses(&self, filters: &CourseFilters) -> Result<Vec<SharedCourse>, ApiError> {
        self.get(&shared_courses_path(filters)).await
    }

    pub async fn list_saved_shared_courses(&self) -> Result<Vec<SharedCourse>, ApiError> {
        self.get("/shared-courses/saved").await
    }

    pub async fn get_shared_course(&self, id: &str) -> Result<SharedCourse, ApiError> {
        self.get(&shared_course_path(id)).await
    }

    pub async fn share_course(&self, req: &ShareCourseRequest) -> Result<SharedCourse, ApiError> {
        self.send(Method::Post, "/shared-courses", req).await
    }

    pub async fn purchase_shared_course(&self, id: &str) -> Result<PurchaseResponse, ApiError> {
        self.post_empty(&format!("{}/purchase", shared_course_path(id))).await
    }

    pub async fn save_shared_course(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty::<IgnoredAny>(&format!("{}/save", shared_course_path(id))).await.map(drop)
    }

    pub async fn unsave_shared_course(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{}/save", shared_course_path(id))).await
    }

    // =========================================================================
    // COUPLES
    // =========================================================================

    /// Current couple, or `None` when the user has no partner.
    pub async fn couple(&self) -> Result<Option<CoupleInfo>, ApiError> {
        self.get("/couples/me").await
    }

    pub async fn break_up(&self) -> Result<(), ApiError> {
        self.delete("/couples/me").await
    }

    pub async fn couple_requests(&self) -> Result<Vec<CoupleRequest>, ApiError> {
        self.get("/couples/requests").await
    }

    pub async fn send_couple_request(&self, partner_nickname: &str) -> Result<(), ApiError> {
        let req = SendCoupleRequest { partner_nickname: partner_nickname.to_owned() };
        self.send::<IgnoredAny, _>(Method::Post, "/couples/requests", &req).await.map(drop)
    }

    pub async fn accept_couple_request(&self, id: &str) -> Result<CoupleInfo, ApiError> {
        self.post_empty(&format!("/couples/requests/{id}/accept")).await
    }

    pub async fn reject_couple_request(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty::<IgnoredAny>(&format!("/couples/requests/{id}/reject")).await.map(drop)
    }

    // =========================================================================
    // REVIEWS
    // =========================================================================

    pub async fn list_reviews(&self, shared_course_id: &str) -> Result<Vec<Review>, ApiError> {
        self.get(&format!("{}/reviews", shared_course_path(shared_course_id))).await
    }

    pub async fn create_review(&self, req: &CreateReviewRequest) -> Result<Review, ApiError> {
        self.send(Method::Post, "/reviews", req).await
    }

    pub async fn my_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get("/reviews/me").await
    }
}

/// Decode a success body. An empty body decodes as JSON `null` so unit and
/// `Option` responses accept `204 No Content`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn course_path(id: &str) -> String {
    format!("/courses/{id}")
}

fn chat_session_path(id: &str) -> String {
    format!("/chat/sessions/{id}")
}

fn shared_course_path(id: &str) -> String {
    format!("/shared-courses/{id}")
}

fn shared_courses_path(filters: &CourseFilters) -> String {
    let pairs = filters.query_pairs();
    if pairs.is_empty() {
        return "/shared-courses".to_owned();
    }
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        query.append_pair(key, value);
    }
    format!("/shared-courses?{}", query.finish())
}
