use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use ink_domain::rating::Rating;

/// A logged book owned by one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub rating: Rating,
    pub read_date: NaiveDate,
    /// Reading notes as an HTML string; stored and returned verbatim.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

/// Maximum tag name length, in characters, after trimming.
pub const TAG_NAME_MAX_LEN: usize = 32;

/// A book joined with its tags, as the listing returns it.
#[derive(Debug, Clone)]
pub struct BookWithTags {
    pub book: Book,
    pub tags: Vec<Tag>,
}

/// A [`BookWithTags`] as seen by a particular caller.
#[derive(Debug, Clone)]
pub struct BookView {
    pub book: Book,
    pub tags: Vec<Tag>,
    pub is_owner: bool,
}

impl BookView {
    /// Anonymous viewers own nothing.
    pub fn for_viewer(entry: BookWithTags, viewer: Option<Uuid>) -> Self {
        let is_owner = viewer.is_some_and(|id| entry.book.is_owned_by(id));
        Self {
            book: entry.book,
            tags: entry.tags,
            is_owner,
        }
    }
}
