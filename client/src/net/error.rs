//! Normalized API failures.
//!
//! ERROR HANDLING
//! ==============
//! Every HTTP or transport failure collapses into one `ApiError`, and its
//! `Display` text is what the user sees in a toast. Status codes map to fixed
//! categories. Other rejections carry the backend's own message when the
//! body has one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Longest plain-text body shown verbatim to the user.
const MAX_PLAIN_MESSAGE_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("{}", .0.as_deref().unwrap_or("You don't have permission to do that."))]
    Forbidden(Option<String>),
    #[error("{}", .0.as_deref().unwrap_or("The requested item could not be found."))]
    NotFound(Option<String>),
    #[error("The server is having trouble ({status}). Please try again shortly.")]
    Server { status: u16 },
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Not available while rendering on the server.")]
    Unavailable,
}

impl ApiError {
    /// Map a non-success status and its raw body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            500..=599 => Self::Server { status },
            _ => Self::Rejected {
                status,
                message: message.unwrap_or_else(|| format!("Request failed ({status}).")),
            },
        }
    }

    /// Whether this failure means the cached session is no longer valid.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Server { status } | Self::Rejected { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Recognizes JSON `message`, `detail`, and `error` string fields (FastAPI
/// style `detail` lists use the first entry's `msg`). Short non-HTML plain
/// text is used as-is.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for field in ["message", "detail", "error"] {
            match value.get(field) {
                Some(serde_json::Value::String(s)) if !s.trim().is_empty() => {
                    return Some(s.trim().to_owned());
                }
                Some(serde_json::Value::Array(items)) => {
                    if let Some(msg) = items
                        .first()
                        .and_then(|item| item.get("msg"))
                        .and_then(serde_json::Value::as_str)
                    {
                        return Some(msg.to_owned());
                    }
                }
                _ => {}
            }
        }
        return None;
    }

    if trimmed.starts_with('<') || trimmed.chars().count() > MAX_PLAIN_MESSAGE_LEN {
        return None;
    }
    Some(trimmed.to_owned())
}
