use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use ink_auth_types::token::JwtSecret;

use crate::infra::db::DbUserRepository;
use crate::infra::events::BroadcastSessionEvents;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub cookie_domain: String,
    pub allowed_email: String,
    pub session_events: BroadcastSessionEvents,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn event_publisher(&self) -> BroadcastSessionEvents {
        self.session_events.clone()
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
