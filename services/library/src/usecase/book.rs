use chrono::Utc;
use uuid::Uuid;

use crate::domain::form::BookFormInput;
use crate::domain::repository::{BookRepository, BookTagRepository};
use crate::domain::types::{Book, BookView};
use crate::error::LibraryServiceError;

// ── ListBooks ────────────────────────────────────────────────────────────────

pub struct ListBooksUseCase<R: BookRepository> {
    pub books: R,
}

impl<R: BookRepository> ListBooksUseCase<R> {
    pub async fn execute(&self, viewer: Option<Uuid>) -> Result<Vec<BookView>, LibraryServiceError> {
        let entries = self.books.list_with_tags().await?;
        Ok(entries
            .into_iter()
            .map(|entry| BookView::for_viewer(entry, viewer))
            .collect())
    }
}

// ── GetBook ──────────────────────────────────────────────────────────────────

pub struct GetBookUseCase<R: BookRepository> {
    pub books: R,
}

impl<R: BookRepository> GetBookUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<BookView, LibraryServiceError> {
        let entry = self
            .books
            .find_with_tags(id)
            .await?
            .ok_or(LibraryServiceError::BookNotFound)?;
        Ok(BookView::for_viewer(entry, viewer))
    }
}

// ── CreateBook ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CreateBookOutput {
    pub id: Uuid,
    /// `false` when the book was stored but its tag links were not.
    pub tags_linked: bool,
}

pub struct CreateBookUseCase<R: BookRepository, T: BookTagRepository> {
    pub books: R,
    pub book_tags: T,
}

impl<R: BookRepository, T: BookTagRepository> CreateBookUseCase<R, T> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: BookFormInput,
    ) -> Result<CreateBookOutput, LibraryServiceError> {
        let form = input.validate()?;

        let now = Utc::now();
        let book = Book {
            id: Uuid::now_v7(),
            user_id,
            title: form.title,
            author: form.author,
            rating: form.rating,
            read_date: form.read_date,
            content: form.content,
            created_at: now,
            updated_at: now,
        };
        self.books.create(&book).await?;

        // The book stays even if linking fails; there is no compensating delete.
        let tags_linked = if form.tag_ids.is_empty() {
            true
        } else {
            match self.book_tags.link(book.id, &form.tag_ids).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(book_id = %book.id, error = %e, "failed to link tags to new book");
                    false
                }
            }
        };

        Ok(CreateBookOutput {
            id: book.id,
            tags_linked,
        })
    }
}

// ── UpdateBook ───────────────────────────────────────────────────────────────

pub struct UpdateBookUseCase<R: BookRepository, T: BookTagRepository> {
    pub books: R,
    pub book_tags: T,
}

impl<R: BookRepository, T: BookTagRepository> UpdateBookUseCase<R, T> {
    /// Field update, then tag replacement. The steps are not atomic: a failure
    /// while replacing tags leaves the new field values in place.
    pub async fn execute(
        &self,
        user_id: Uuid,
        id: Uuid,
        input: BookFormInput,
    ) -> Result<(), LibraryServiceError> {
        let form = input.validate()?;

        let existing = self
            .books
            .find_by_id(id)
            .await?
            .ok_or(LibraryServiceError::BookNotFound)?;
        if !existing.is_owned_by(user_id) {
            return Err(LibraryServiceError::Forbidden);
        }

        let book = Book {
            title: form.title,
            author: form.author,
            rating: form.rating,
            read_date: form.read_date,
            content: form.content,
            updated_at: Utc::now(),
            ..existing
        };
        self.books.update(&book).await?;

        self.book_tags.unlink_all(id).await?;
        if !form.tag_ids.is_empty() {
            self.book_tags.link(id, &form.tag_ids).await?;
        }
        Ok(())
    }
}

// ── DeleteBook ───────────────────────────────────────────────────────────────

pub struct DeleteBookUseCase<R: BookRepository> {
    pub books: R,
}

impl<R: BookRepository> DeleteBookUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, id: Uuid) -> Result<(), LibraryServiceError> {
        let existing = self
            .books
            .find_by_id(id)
            .await?
            .ok_or(LibraryServiceError::BookNotFound)?;
        if !existing.is_owned_by(user_id) {
            return Err(LibraryServiceError::Forbidden);
        }

        // Lost a race with another delete: same outcome as absent.
        if !self.books.delete(id).await? {
            return Err(LibraryServiceError::BookNotFound);
        }
        Ok(())
    }
}
