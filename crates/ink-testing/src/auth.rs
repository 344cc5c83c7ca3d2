//! Mock auth helpers for integration tests.
//!
//! Services validate the `ink_access_token` cookie themselves, so `MockAuth` signs a
//! real access token with the test secret instead of faking headers.

use http::HeaderValue;
use ink_auth_types::cookie::{ACCESS_TOKEN_EXP, INK_ACCESS_TOKEN};
use ink_auth_types::token::{TokenKind, issue_token};
use uuid::Uuid;

use crate::TEST_JWT_SECRET;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    secret: String,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            secret: TEST_JWT_SECRET.to_owned(),
        }
    }

    /// A freshly signed access token for this user.
    pub fn access_token(&self) -> String {
        issue_token(self.user_id, TokenKind::Access, ACCESS_TOKEN_EXP, &self.secret)
            .map(|(token, _)| token)
            .unwrap()
    }

    /// A freshly signed refresh token for this user.
    pub fn refresh_token(&self) -> String {
        issue_token(self.user_id, TokenKind::Refresh, ACCESS_TOKEN_EXP, &self.secret)
            .map(|(token, _)| token)
            .unwrap()
    }

    /// `Cookie` header value carrying the access token.
    pub fn cookie(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("{INK_ACCESS_TOKEN}={}", self.access_token())).unwrap()
    }

    /// `Authorization` header value for clients that don't keep cookies.
    pub fn bearer(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("Bearer {}", self.access_token())).unwrap()
    }
}
