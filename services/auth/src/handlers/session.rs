use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};

use ink_auth_types::identity::Identity;

use crate::state::AppState;

// ── GET /auth/session/events ─────────────────────────────────────────────────

/// Server-sent events for the caller's own session changes.
pub async fn session_events(
    State(state): State<AppState>,
    identity: Identity,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::debug!(user_id = %identity.user_id, "session event subscriber connected");

    let stream = state
        .session_events
        .subscribe(identity.user_id)
        .map(|event| {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Ok(Event::default().event(event.kind.as_str()).data(data))
        });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
