use axum::{Json, extract::State, http::StatusCode};

use ink_core::health::{Readiness, readiness};

use crate::state::AppState;

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Ready once the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    readiness(state.db.ping().await)
}
