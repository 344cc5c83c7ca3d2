use axum::{
    Router,
    routing::{get, post},
};

use ink_core::health::healthz;
use ink_core::middleware::with_observability;

use crate::handlers::{
    health::readyz,
    session::session_events,
    token::{get_session, refresh_session, sign_in, sign_out},
    users::sign_up,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/auth/users", post(sign_up))
        // Token
        .route(
            "/auth/token",
            get(get_session)
                .post(sign_in)
                .patch(refresh_session)
                .delete(sign_out),
        )
        // Session events
        .route("/auth/session/events", get(session_events))
        .with_state(state);

    with_observability(router)
}
