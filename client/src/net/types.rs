//! Typed request/response DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! The backend omits fields freely and is loose about numeric encodings, so
//! every optional field is an explicit `Option` or carries a serde default
//! here. Pages consume these types as-is and never back-fill values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// USERS + AUTH
// =============================================================================

/// The authenticated user, as returned by auth endpoints and cached locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Absent until onboarding completes.
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl User {
    /// Whether the user has finished onboarding (has a non-blank nickname).
    pub fn is_onboarded(&self) -> bool {
        self.nickname.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Nickname for display, falling back to the email local part.
    pub fn display_name(&self) -> String {
        if let Some(nickname) = self.nickname.as_deref().filter(|n| !n.trim().is_empty()) {
            return nickname.to_owned();
        }
        self.email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("guest")
            .to_owned()
    }
}

/// Compact user reference embedded in couple and review payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OAuthExchangeRequest {
    pub code: String,
}

/// Session issued by login, signup, or OAuth exchange.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
}

/// Partial profile update; `None` fields are left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Credit balance used to buy shared courses and generate recommendations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub balance: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeductRequest {
    pub amount: i64,
    pub reason: String,
}

// =============================================================================
// COURSES
// =============================================================================

/// A single stop on a date course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A course saved by the current user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Course suggested by the assistant inside a chat reply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub places: Vec<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_session_id: Option<String>,
}

impl CreateCourseRequest {
    pub fn from_recommendation(rec: &CourseRecommendation, chat_session_id: Option<String>) -> Self {
        Self {
            title: rec.title.clone(),
            description: rec.description.clone(),
            region: rec.region.clone(),
            places: rec.places.clone(),
            chat_session_id,
        }
    }
}

// =============================================================================
// CHAT
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[default]
    User,
    Assistant,
    System,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ChatSession {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.trim().is_empty()).unwrap_or("New chat")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub role: ChatRole,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub recommendation: Option<CourseRecommendation>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatSessionDetail {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Assistant reply plus the remaining credit balance when the turn was billed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SendMessageResponse {
    pub reply: ChatMessage,
    #[serde(default)]
    pub balance: Option<i64>,
}

// =============================================================================
// MARKETPLACE
// =============================================================================

/// A course listed in the community marketplace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedCourse {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub price: i64,
    #[serde(default)]
    pub author_nickname: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub rating_avg: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub review_count: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub purchase_count: i64,
    /// Places are withheld by the backend until the course is purchased.
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub purchased: bool,
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub is_mine: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SharedCourse {
    /// Whether the current user may read places and write a review.
    pub fn is_unlocked(&self) -> bool {
        self.purchased || self.is_mine || self.price == 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShareCourseRequest {
    pub course_id: String,
    pub price: i64,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PurchaseResponse {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub balance: i64,
}

// =============================================================================
// COUPLES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoupleInfo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub partner: UserSummary,
    #[serde(default)]
    pub started_at: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoupleRequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoupleRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub requester: UserSummary,
    #[serde(default)]
    pub status: CoupleRequestStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendCoupleRequest {
    pub partner_nickname: String,
}

// =============================================================================
// REVIEWS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub shared_course_id: String,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub author_nickname: String,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub rating: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateReviewRequest {
    pub shared_course_id: String,
    pub rating: i64,
    pub content: String,
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

/// Identifiers arrive as numbers or strings; both become strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

/// Integers arrive as numbers, integral floats, or numeric strings. `null` is zero.
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
