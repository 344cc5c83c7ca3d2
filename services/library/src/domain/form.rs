//! Create/update payload validation for books.

use chrono::NaiveDate;
use uuid::Uuid;

use ink_domain::rating::Rating;

use crate::error::LibraryServiceError;

/// Book fields as submitted, before validation.
#[derive(Debug, Clone)]
pub struct BookFormInput {
    pub title: String,
    pub author: Option<String>,
    pub rating: i16,
    pub read_date: NaiveDate,
    pub content: String,
    pub tag_ids: Vec<Uuid>,
}

/// Validated book fields. Only constructible through [`BookFormInput::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: Option<String>,
    pub rating: Rating,
    pub read_date: NaiveDate,
    pub content: String,
    pub tag_ids: Vec<Uuid>,
}

impl BookFormInput {
    /// Checks run in field order; the first failure wins.
    pub fn validate(self) -> Result<BookForm, LibraryServiceError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LibraryServiceError::InvalidTitle);
        }

        let author = self
            .author
            .map(|a| a.trim().to_owned())
            .filter(|a| !a.is_empty());

        let rating =
            Rating::require_rated(self.rating).map_err(|_| LibraryServiceError::InvalidRating)?;

        if self.content.trim().is_empty() {
            return Err(LibraryServiceError::InvalidContent);
        }

        Ok(BookForm {
            title: title.to_owned(),
            author,
            rating,
            read_date: self.read_date,
            content: self.content,
            tag_ids: dedup_preserving_order(self.tag_ids),
        })
    }
}

fn dedup_preserving_order(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Trim a tag name and check its length.
pub fn validate_tag_name(name: &str) -> Result<String, LibraryServiceError> {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 || len > crate::domain::types::TAG_NAME_MAX_LEN {
        return Err(LibraryServiceError::InvalidTagName);
    }
    Ok(name.to_owned())
}
