#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Book, BookWithTags, Tag};
use crate::error::LibraryServiceError;

/// Repository for books, including the tag join used by reads.
pub trait BookRepository: Send + Sync {
    /// Every book with its tags, read date descending then created-at descending.
    async fn list_with_tags(&self) -> Result<Vec<BookWithTags>, LibraryServiceError>;

    async fn find_with_tags(&self, id: Uuid) -> Result<Option<BookWithTags>, LibraryServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, LibraryServiceError>;

    async fn create(&self, book: &Book) -> Result<(), LibraryServiceError>;

    /// Overwrite the editable fields and `updated_at`.
    async fn update(&self, book: &Book) -> Result<(), LibraryServiceError>;

    /// Delete a book. Returns `true` if deleted. Tag links go with it by cascade.
    async fn delete(&self, id: Uuid) -> Result<bool, LibraryServiceError>;
}

/// Repository for book-tag links.
pub trait BookTagRepository: Send + Sync {
    /// Insert links, skipping pairs that already exist.
    async fn link(&self, book_id: Uuid, tag_ids: &[Uuid]) -> Result<(), LibraryServiceError>;

    async fn unlink_all(&self, book_id: Uuid) -> Result<(), LibraryServiceError>;
}

/// Repository for tags.
pub trait TagRepository: Send + Sync {
    /// All tags ordered by name.
    async fn list(&self) -> Result<Vec<Tag>, LibraryServiceError>;

    /// Returns `TagAlreadyExists` on a name collision.
    async fn create(&self, tag: &Tag) -> Result<(), LibraryServiceError>;
}
