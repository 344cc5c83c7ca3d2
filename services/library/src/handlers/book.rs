use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ink_auth_types::identity::{Identity, MaybeIdentity};
use ink_domain::rating::Rating;

use crate::domain::form::BookFormInput;
use crate::domain::types::BookView;
use crate::error::LibraryServiceError;
use crate::handlers::tag::TagResponse;
use crate::state::AppState;
use crate::usecase::book::{
    CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, ListBooksUseCase, UpdateBookUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

/// Body of `POST /books` and `PUT /books/{id}`.
///
/// Missing text fields and any integer rating reach form validation, so they
/// fail with the field's own error kind.
#[derive(Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub rating: i64,
    /// `yyyy-MM-dd`
    pub read_date: NaiveDate,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

impl From<BookRequest> for BookFormInput {
    fn from(req: BookRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
            // Anything beyond i16 is out of range either way.
            rating: i16::try_from(req.rating).unwrap_or(i16::MAX),
            read_date: req.read_date,
            content: req.content,
            tag_ids: req.tag_ids,
        }
    }
}

#[derive(Serialize)]
pub struct BookResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub rating: Rating,
    pub read_date: NaiveDate,
    pub content: String,
    pub tags: Vec<TagResponse>,
    pub is_owner: bool,
    #[serde(serialize_with = "ink_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ink_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<BookView> for BookResponse {
    fn from(view: BookView) -> Self {
        let book = view.book;
        Self {
            id: book.id,
            user_id: book.user_id,
            title: book.title,
            author: book.author,
            rating: book.rating,
            read_date: book.read_date,
            content: book.content,
            tags: view.tags.into_iter().map(TagResponse::from).collect(),
            is_owner: view.is_owner,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct CreateBookResponse {
    pub id: Uuid,
    pub tags_linked: bool,
}

// ── GET /books ───────────────────────────────────────────────────────────────

pub async fn list_books(
    State(state): State<AppState>,
    viewer: MaybeIdentity,
) -> Result<Json<Vec<BookResponse>>, LibraryServiceError> {
    let usecase = ListBooksUseCase {
        books: state.book_repo(),
    };
    let views = usecase.execute(viewer.user_id()).await?;
    Ok(Json(views.into_iter().map(BookResponse::from).collect()))
}

// ── GET /books/{id} ──────────────────────────────────────────────────────────

pub async fn get_book(
    State(state): State<AppState>,
    viewer: MaybeIdentity,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, LibraryServiceError>,
) -> Result<Json<BookResponse>, LibraryServiceError> {
    let usecase = GetBookUseCase {
        books: state.book_repo(),
    };
    let view = usecase.execute(id, viewer.user_id()).await?;
    Ok(Json(view.into()))
}

// ── POST /books ──────────────────────────────────────────────────────────────

pub async fn create_book(
    State(state): State<AppState>,
    identity: Identity,
    WithRejection(Json(body), _): WithRejection<Json<BookRequest>, LibraryServiceError>,
) -> Result<impl IntoResponse, LibraryServiceError> {
    let usecase = CreateBookUseCase {
        books: state.book_repo(),
        book_tags: state.book_tag_repo(),
    };
    let out = usecase.execute(identity.user_id, body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse {
            id: out.id,
            tags_linked: out.tags_linked,
        }),
    ))
}

// ── PUT /books/{id} ──────────────────────────────────────────────────────────

pub async fn update_book(
    State(state): State<AppState>,
    identity: Identity,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, LibraryServiceError>,
    WithRejection(Json(body), _): WithRejection<Json<BookRequest>, LibraryServiceError>,
) -> Result<StatusCode, LibraryServiceError> {
    let usecase = UpdateBookUseCase {
        books: state.book_repo(),
        book_tags: state.book_tag_repo(),
    };
    usecase.execute(identity.user_id, id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /books/{id} ───────────────────────────────────────────────────────

pub async fn delete_book(
    State(state): State<AppState>,
    identity: Identity,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, LibraryServiceError>,
) -> Result<StatusCode, LibraryServiceError> {
    let usecase = DeleteBookUseCase {
        books: state.book_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
