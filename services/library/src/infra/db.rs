use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, SqlErr, sea_query::OnConflict,
};
use uuid::Uuid;

use ink_domain::rating::Rating;
use ink_library_schema::{book_tags, books, tags};

use crate::domain::repository::{BookRepository, BookTagRepository, TagRepository};
use crate::domain::types::{Book, BookWithTags, Tag};
use crate::error::LibraryServiceError;

// ── Book repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookRepository {
    pub db: DatabaseConnection,
}

impl DbBookRepository {
    /// Load links and tags for `models` and join them in memory.
    async fn attach_tags(
        &self,
        models: Vec<books::Model>,
    ) -> Result<Vec<BookWithTags>, LibraryServiceError> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let book_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links = book_tags::Entity::find()
            .filter(book_tags::Column::BookId.is_in(book_ids))
            .all(&self.db)
            .await
            .context("list book tag links")?;

        let tag_models = if links.is_empty() {
            vec![]
        } else {
            let mut tag_ids: Vec<Uuid> = links.iter().map(|l| l.tag_id).collect();
            tag_ids.sort_unstable();
            tag_ids.dedup();
            tags::Entity::find()
                .filter(tags::Column::Id.is_in(tag_ids))
                .all(&self.db)
                .await
                .context("list linked tags")?
        };

        Ok(join_books_with_tags(models, links, tag_models))
    }
}

impl BookRepository for DbBookRepository {
    async fn list_with_tags(&self) -> Result<Vec<BookWithTags>, LibraryServiceError> {
        let models = books::Entity::find()
            .order_by_desc(books::Column::ReadDate)
            .order_by_desc(books::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list books")?;
        self.attach_tags(models).await
    }

    async fn find_with_tags(&self, id: Uuid) -> Result<Option<BookWithTags>, LibraryServiceError> {
        let Some(model) = books::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find book by id")?
        else {
            return Ok(None);
        };
        Ok(self.attach_tags(vec![model]).await?.into_iter().next())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, LibraryServiceError> {
        let model = books::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find book by id")?;
        Ok(model.map(book_from_model))
    }

    async fn create(&self, book: &Book) -> Result<(), LibraryServiceError> {
        books::ActiveModel {
            id: Set(book.id),
            user_id: Set(book.user_id),
            title: Set(book.title.clone()),
            author: Set(book.author.clone()),
            rating: Set(i16::from(book.rating)),
            read_date: Set(book.read_date),
            content: Set(book.content.clone()),
            created_at: Set(book.created_at),
            updated_at: Set(book.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create book")?;
        Ok(())
    }

    async fn update(&self, book: &Book) -> Result<(), LibraryServiceError> {
        books::ActiveModel {
            id: Set(book.id),
            title: Set(book.title.clone()),
            author: Set(book.author.clone()),
            rating: Set(i16::from(book.rating)),
            read_date: Set(book.read_date),
            content: Set(book.content.clone()),
            updated_at: Set(book.updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update book")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, LibraryServiceError> {
        let result = books::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete book")?;
        Ok(result.rows_affected > 0)
    }
}

/// Attach tags to books, keeping the order of `models`. Links whose tag row is
/// missing are dropped; each book's tags are sorted by name.
fn join_books_with_tags(
    models: Vec<books::Model>,
    links: Vec<book_tags::Model>,
    tag_models: Vec<tags::Model>,
) -> Vec<BookWithTags> {
    let tags_by_id: HashMap<Uuid, Tag> = tag_models
        .into_iter()
        .map(|m| (m.id, tag_from_model(m)))
        .collect();

    let mut tags_by_book: HashMap<Uuid, Vec<Tag>> = HashMap::new();
    for link in links {
        if let Some(tag) = tags_by_id.get(&link.tag_id) {
            tags_by_book.entry(link.book_id).or_default().push(tag.clone());
        }
    }

    models
        .into_iter()
        .map(|model| {
            let mut tags = tags_by_book.remove(&model.id).unwrap_or_default();
            tags.sort_by(|a, b| a.name.cmp(&b.name));
            BookWithTags {
                book: book_from_model(model),
                tags,
            }
        })
        .collect()
}

fn book_from_model(model: books::Model) -> Book {
    Book {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        author: model.author,
        // Rows written outside the service may carry any small integer.
        rating: Rating::new(model.rating).unwrap_or(Rating::UNRATED),
        read_date: model.read_date,
        content: model.content,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── BookTag repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookTagRepository {
    pub db: DatabaseConnection,
}

impl BookTagRepository for DbBookTagRepository {
    async fn link(&self, book_id: Uuid, tag_ids: &[Uuid]) -> Result<(), LibraryServiceError> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let rows = tag_ids.iter().map(|tag_id| book_tags::ActiveModel {
            book_id: Set(book_id),
            tag_id: Set(*tag_id),
        });
        book_tags::Entity::insert_many(rows)
            .on_conflict(
                OnConflict::columns([book_tags::Column::BookId, book_tags::Column::TagId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("link tags to book")?;
        Ok(())
    }

    async fn unlink_all(&self, book_id: Uuid) -> Result<(), LibraryServiceError> {
        book_tags::Entity::delete_many()
            .filter(book_tags::Column::BookId.eq(book_id))
            .exec(&self.db)
            .await
            .context("unlink tags from book")?;
        Ok(())
    }
}

// ── Tag repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTagRepository {
    pub db: DatabaseConnection,
}

impl TagRepository for DbTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, LibraryServiceError> {
        let models = tags::Entity::find()
            .order_by_asc(tags::Column::Name)
            .all(&self.db)
            .await
            .context("list tags")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn create(&self, tag: &Tag) -> Result<(), LibraryServiceError> {
        let result = tags::ActiveModel {
            id: Set(tag.id),
            name: Set(tag.name.clone()),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(LibraryServiceError::TagAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create tag").into()),
        }
    }
}

fn tag_from_model(model: tags::Model) -> Tag {
    Tag {
        id: model.id,
        name: model.name,
    }
}
