use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use ink_auth_types::token::JwtSecret;

use crate::infra::db::{DbBookRepository, DbBookTagRepository, DbTagRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn book_repo(&self) -> DbBookRepository {
        DbBookRepository {
            db: self.db.clone(),
        }
    }

    pub fn book_tag_repo(&self) -> DbBookTagRepository {
        DbBookTagRepository {
            db: self.db.clone(),
        }
    }

    pub fn tag_repo(&self) -> DbTagRepository {
        DbTagRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
