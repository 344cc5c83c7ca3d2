use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ink_auth_types::identity::Identity;

use crate::domain::types::Tag;
use crate::error::LibraryServiceError;
use crate::state::AppState;
use crate::usecase::tag::{CreateTagUseCase, ListTagsUseCase};

#[derive(Serialize)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

// ── GET /tags ────────────────────────────────────────────────────────────────

pub async fn list_tags(
    State(state): State<AppState>,
) -> Result<Json<Vec<TagResponse>>, LibraryServiceError> {
    let usecase = ListTagsUseCase {
        tags: state.tag_repo(),
    };
    let tags = usecase.execute().await?;
    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

// ── POST /tags ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTagRequest {
    #[serde(default)]
    pub name: String,
}

pub async fn create_tag(
    State(state): State<AppState>,
    _identity: Identity,
    WithRejection(Json(body), _): WithRejection<Json<CreateTagRequest>, LibraryServiceError>,
) -> Result<impl IntoResponse, LibraryServiceError> {
    let usecase = CreateTagUseCase {
        tags: state.tag_repo(),
    };
    let tag = usecase.execute(&body.name).await?;
    Ok((StatusCode::CREATED, Json(TagResponse::from(tag))))
}
