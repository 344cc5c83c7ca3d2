use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// `GET /healthz`: the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Readiness {
    pub status: &'static str,
}

/// Turn a dependency check into a `/readyz` response: 200 `ready`, or 503
/// `unavailable` with the failure logged.
pub fn readiness<E: Display>(check: Result<(), E>) -> (StatusCode, Json<Readiness>) {
    match check {
        Ok(()) => (StatusCode::OK, Json(Readiness { status: "ready" })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "unavailable",
                }),
            )
        }
    }
}
