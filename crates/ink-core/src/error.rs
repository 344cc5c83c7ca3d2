use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Contract every service error enum implements so it renders the shared JSON body.
///
/// Body shape: `{ "kind": "UPPER_SNAKE", "message": "<Display>" }`.
pub trait ServiceError: std::fmt::Display {
    /// Stable machine-readable error code.
    fn kind(&self) -> &'static str;

    fn status(&self) -> StatusCode;

    /// The infrastructure failure behind a 500, if any.
    fn internal(&self) -> Option<&anyhow::Error> {
        None
    }
}

/// Render a service error as `(status, Json(body))`.
///
/// Logs 500s only. The trace layer already records method/uri/status for every
/// request, and 4xx are expected client errors.
pub fn render<E: ServiceError>(err: &E) -> Response {
    if let Some(source) = err.internal() {
        let chain = format!("{source:#}");
        tracing::error!(error = %chain, kind = err.kind(), "internal error");
    }
    let body = serde_json::json!({
        "kind": err.kind(),
        "message": err.to_string(),
    });
    (err.status(), axum::Json(body)).into_response()
}
