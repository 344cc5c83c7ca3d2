use axum::Json;
use serde::Serialize;

use ink_domain::template::TemplateKind;

#[derive(Serialize)]
pub struct TemplateResponse {
    pub kind: TemplateKind,
    pub label: &'static str,
    pub content: &'static str,
}

// ── GET /templates ───────────────────────────────────────────────────────────

pub async fn list_templates() -> Json<Vec<TemplateResponse>> {
    let templates = TemplateKind::ALL
        .into_iter()
        .map(|kind| TemplateResponse {
            kind,
            label: kind.label(),
            content: kind.content(),
        })
        .collect();
    Json(templates)
}
