use uuid::Uuid;

use ink_auth_types::cookie::{ACCESS_TOKEN_EXP, REFRESH_TOKEN_EXP};
use ink_auth_types::token::{TokenKind, issue_token, validate_access_token, validate_refresh_token};

use crate::domain::repository::{SessionEventPublisher, UserRepository};
use crate::domain::types::{SessionEvent, SessionEventKind, User, is_allowed_email, normalize_email};
use crate::error::AuthServiceError;
use crate::usecase::password::verify_password;

/// Freshly signed access/refresh pair.
#[derive(Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

pub fn issue_token_pair(user_id: Uuid, secret: &str) -> Result<TokenPair, AuthServiceError> {
    let (access_token, access_token_exp) =
        issue_token(user_id, TokenKind::Access, ACCESS_TOKEN_EXP, secret)
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
    let (refresh_token, _) = issue_token(user_id, TokenKind::Refresh, REFRESH_TOKEN_EXP, secret)
        .map_err(|e| AuthServiceError::Internal(e.into()))?;
    Ok(TokenPair {
        access_token,
        access_token_exp,
        refresh_token,
    })
}

// ── SignIn ───────────────────────────────────────────────────────────────────

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignInOutput {
    pub user: User,
    pub tokens: TokenPair,
}

pub struct SignInUseCase<U: UserRepository, P: SessionEventPublisher> {
    pub users: U,
    pub events: P,
    pub allowed_email: String,
    pub jwt_secret: String,
}

impl<U: UserRepository, P: SessionEventPublisher> SignInUseCase<U, P> {
    pub async fn execute(&self, input: SignInInput) -> Result<SignInOutput, AuthServiceError> {
        if !is_allowed_email(&input.email, &self.allowed_email) {
            return Err(AuthServiceError::EmailNotAllowed);
        }

        let user = self
            .users
            .find_by_email(&normalize_email(&input.email))
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let tokens = issue_token_pair(user.id, &self.jwt_secret)?;
        self.events
            .publish(SessionEvent::now(user.id, SessionEventKind::SignedIn));

        Ok(SignInOutput { user, tokens })
    }
}

// ── GetSession ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub access_token_exp: u64,
}

pub struct GetSessionUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> GetSessionUseCase<U> {
    pub async fn execute(&self, access_token: &str) -> Result<Session, AuthServiceError> {
        let info = validate_access_token(access_token, &self.jwt_secret)
            .map_err(|_| AuthServiceError::InvalidToken)?;

        // A token for a deleted account is as good as no token.
        let user = self
            .users
            .find_by_id(info.user_id)
            .await?
            .ok_or(AuthServiceError::InvalidToken)?;

        Ok(Session {
            user_id: user.id,
            email: user.email,
            access_token_exp: info.access_token_exp,
        })
    }
}

// ── RefreshSession ───────────────────────────────────────────────────────────

pub struct RefreshSessionUseCase<U: UserRepository, P: SessionEventPublisher> {
    pub users: U,
    pub events: P,
    pub jwt_secret: String,
}

impl<U: UserRepository, P: SessionEventPublisher> RefreshSessionUseCase<U, P> {
    pub async fn execute(&self, refresh_token: &str) -> Result<TokenPair, AuthServiceError> {
        // Only the refresh token matters here; an expired access token is expected.
        let info = validate_refresh_token(refresh_token, &self.jwt_secret)
            .map_err(|_| AuthServiceError::InvalidRefreshToken)?;

        let user = self
            .users
            .find_by_id(info.user_id)
            .await?
            .ok_or(AuthServiceError::InvalidRefreshToken)?;

        let tokens = issue_token_pair(user.id, &self.jwt_secret)?;
        self.events
            .publish(SessionEvent::now(user.id, SessionEventKind::TokenRefreshed));
        Ok(tokens)
    }
}

// ── SignOut ──────────────────────────────────────────────────────────────────

pub struct SignOutUseCase<P: SessionEventPublisher> {
    pub events: P,
}

impl<P: SessionEventPublisher> SignOutUseCase<P> {
    /// Tokens are stateless, so signing out only notifies listeners; the handler
    /// clears the cookies.
    pub fn execute(&self, user_id: Uuid) {
        self.events
            .publish(SessionEvent::now(user_id, SessionEventKind::SignedOut));
    }
}
