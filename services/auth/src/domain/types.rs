use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Stored account. `email` is always normalized (see [`normalize_email`]).
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and lower-case an email for comparison and storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Whether `email` matches the configured allow-listed address.
pub fn is_allowed_email(email: &str, allowed: &str) -> bool {
    let allowed = normalize_email(allowed);
    !allowed.is_empty() && normalize_email(email) == allowed
}

/// Kind of session change pushed to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEventKind {
    SignedIn,
    TokenRefreshed,
    SignedOut,
}

impl SessionEventKind {
    /// SSE `event:` field value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignedIn => "signed_in",
            Self::TokenRefreshed => "token_refreshed",
            Self::SignedOut => "signed_out",
        }
    }
}

/// A session change for one user.
#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    pub user_id: Uuid,
    pub kind: SessionEventKind,
    #[serde(serialize_with = "ink_core::serde::to_rfc3339_ms")]
    pub at: DateTime<Utc>,
}

impl SessionEvent {
    pub fn now(user_id: Uuid, kind: SessionEventKind) -> Self {
        Self {
            user_id,
            kind,
            at: Utc::now(),
        }
    }
}

/// Capacity of the in-process session event channel.
pub const SESSION_EVENT_CAPACITY: usize = 64;
