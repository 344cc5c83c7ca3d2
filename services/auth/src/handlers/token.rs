use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::{CookieJar, WithRejection};
use serde::{Deserialize, Serialize};

use ink_auth_types::{
    cookie::{INK_REFRESH_TOKEN, clear_cookies, set_access_token_cookie, set_refresh_token_cookie},
    identity::{MaybeIdentity, access_token_from_headers},
};

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::token::{
    GetSessionUseCase, RefreshSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase,
    TokenPair,
};

const X_INK_ACCESS_TOKEN_EXPIRES: &str = "x-ink-access-token-expires";

fn token_expires_header(exp: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(X_INK_ACCESS_TOKEN_EXPIRES),
        HeaderValue::from(exp),
    );
    headers
}

fn set_token_cookies(jar: CookieJar, tokens: TokenPair, domain: &str) -> CookieJar {
    let jar = set_access_token_cookie(jar, tokens.access_token, domain);
    set_refresh_token_cookie(jar, tokens.refresh_token, domain)
}

// ── GET /auth/token ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SessionResponse {
    pub user_id: uuid::Uuid,
    pub email: String,
    pub access_token_exp: u64,
}

pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AuthServiceError> {
    let token_value = access_token_from_headers(&headers).ok_or(AuthServiceError::InvalidToken)?;

    let usecase = GetSessionUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let session = usecase.execute(&token_value).await?;

    let headers = token_expires_header(session.access_token_exp);
    let body = SessionResponse {
        user_id: session.user_id,
        email: session.email,
        access_token_exp: session.access_token_exp,
    };
    Ok((StatusCode::OK, headers, Json(body)))
}

// ── POST /auth/token ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(body), _): WithRejection<Json<SignInRequest>, AuthServiceError>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = SignInUseCase {
        users: state.user_repo(),
        events: state.event_publisher(),
        allowed_email: state.allowed_email.clone(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };

    let out = usecase
        .execute(SignInInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let headers = token_expires_header(out.tokens.access_token_exp);
    let jar = set_token_cookies(jar, out.tokens, &state.cookie_domain);
    Ok((StatusCode::CREATED, jar, headers))
}

// ── PATCH /auth/token ────────────────────────────────────────────────────────

pub async fn refresh_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthServiceError> {
    let refresh_value = jar
        .get(INK_REFRESH_TOKEN)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(AuthServiceError::InvalidRefreshToken)?;

    let usecase = RefreshSessionUseCase {
        users: state.user_repo(),
        events: state.event_publisher(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let tokens = usecase.execute(&refresh_value).await?;

    let headers = token_expires_header(tokens.access_token_exp);
    let jar = set_token_cookies(jar, tokens, &state.cookie_domain);
    Ok((StatusCode::CREATED, jar, headers))
}

// ── DELETE /auth/token ───────────────────────────────────────────────────────

/// Always clears the cookies, so a browser holding an expired access token can
/// still sign out. Only a known caller produces a `signed_out` event.
pub async fn sign_out(
    State(state): State<AppState>,
    viewer: MaybeIdentity,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(user_id) = viewer.user_id() {
        SignOutUseCase {
            events: state.event_publisher(),
        }
        .execute(user_id);
    }

    let jar = clear_cookies(jar, &state.cookie_domain);
    (StatusCode::NO_CONTENT, jar)
}
