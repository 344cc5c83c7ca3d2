use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::signup::{SignUpInput, SignUpUseCase};

// ── POST /auth/users ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub id: Uuid,
    pub email: String,
}

pub async fn sign_up(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<SignUpRequest>, AuthServiceError>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = SignUpUseCase {
        users: state.user_repo(),
        allowed_email: state.allowed_email.clone(),
    };
    let user = usecase
        .execute(SignUpInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            id: user.id,
            email: user.email,
        }),
    ))
}
