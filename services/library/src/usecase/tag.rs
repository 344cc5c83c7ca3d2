use uuid::Uuid;

use crate::domain::form::validate_tag_name;
use crate::domain::repository::TagRepository;
use crate::domain::types::Tag;
use crate::error::LibraryServiceError;

// ── ListTags ─────────────────────────────────────────────────────────────────

pub struct ListTagsUseCase<R: TagRepository> {
    pub tags: R,
}

impl<R: TagRepository> ListTagsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Tag>, LibraryServiceError> {
        self.tags.list().await
    }
}

// ── CreateTag ────────────────────────────────────────────────────────────────

pub struct CreateTagUseCase<R: TagRepository> {
    pub tags: R,
}

impl<R: TagRepository> CreateTagUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<Tag, LibraryServiceError> {
        let tag = Tag {
            id: Uuid::now_v7(),
            name: validate_tag_name(name)?,
        };
        self.tags.create(&tag).await?;
        Ok(tag)
    }
}
