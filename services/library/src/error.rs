use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ink_core::error::{ServiceError, render};

/// Library service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum LibraryServiceError {
    #[error("book not found")]
    BookNotFound,
    #[error("not the owner of this book")]
    Forbidden,
    #[error("title is required")]
    InvalidTitle,
    #[error("rating must be between 1 and 5")]
    InvalidRating,
    #[error("content is required")]
    InvalidContent,
    #[error("tag name must be 1 to 32 characters")]
    InvalidTagName,
    #[error("tag already exists")]
    TagAlreadyExists,
    /// Body or path that could not be parsed at all.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError for LibraryServiceError {
    fn kind(&self) -> &'static str {
        match self {
            Self::BookNotFound => "BOOK_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidTitle => "INVALID_TITLE",
            Self::InvalidRating => "INVALID_RATING",
            Self::InvalidContent => "INVALID_CONTENT",
            Self::InvalidTagName => "INVALID_TAG_NAME",
            Self::TagAlreadyExists => "TAG_ALREADY_EXISTS",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BookNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidTitle
            | Self::InvalidRating
            | Self::InvalidContent
            | Self::InvalidTagName
            | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::TagAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn internal(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Internal(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for LibraryServiceError {
    fn into_response(self) -> Response {
        render(&self)
    }
}

impl From<JsonRejection> for LibraryServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for LibraryServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}
