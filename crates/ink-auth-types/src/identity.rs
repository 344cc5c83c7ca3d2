//! Request identity extractors.
//!
//! The access token is read from the `ink_access_token` cookie, falling back to an
//! `Authorization: Bearer <token>` header.

use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use http::{HeaderMap, StatusCode};
use http::header::AUTHORIZATION;
use http::request::Parts;
use uuid::Uuid;

use crate::cookie::INK_ACCESS_TOKEN;
use crate::token::{AuthError, JwtSecret, validate_access_token};

/// Authenticated caller. Rejects with 401 when no valid access token is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
}

/// Caller identity for public endpoints. Never rejects; an absent or invalid
/// token yields `MaybeIdentity(None)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeIdentity(pub Option<Identity>);

impl MaybeIdentity {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.map(|i| i.user_id)
    }
}

/// 401 rendered with the shared `{kind, message}` error body.
#[derive(Debug)]
pub struct Unauthenticated;

impl IntoResponse for Unauthenticated {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "UNAUTHENTICATED",
            "message": "authentication required",
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Pull the raw access token out of request headers, cookie first.
pub fn access_token_from_headers(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(INK_ACCESS_TOKEN) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_owned());
        }
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

fn resolve(parts: &Parts, secret: &JwtSecret) -> Result<Identity, AuthError> {
    let token = access_token_from_headers(&parts.headers).ok_or(AuthError::Malformed)?;
    let info = validate_access_token(&token, secret.as_str())?;
    Ok(Identity {
        user_id: info.user_id,
    })
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = Unauthenticated;

    // axum-core 0.5 declares `fn -> impl Future + Send`; resolve synchronously and
    // hand back a 'static future so no borrow of `parts` crosses the await.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = resolve(parts, &secret);
        async move {
            result.map_err(|e| {
                tracing::debug!(error = %e, "rejecting unauthenticated request");
                Unauthenticated
            })
        }
    }
}

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let identity = resolve(parts, &secret).ok();
        async move { Ok(Self(identity)) }
    }
}
