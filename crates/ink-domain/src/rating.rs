//! Reader score for a logged book.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reader score on a five-star scale.
///
/// Wire format: bare integer `0..=5`, where `0` means the book has not been rated yet.
/// Submitted forms must carry a rated value (see [`Rating::require_rated`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Rating(u8);

/// Error returned when an integer falls outside `0..=5`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("rating out of range: {0}")]
pub struct RatingOutOfRange(pub i16);

impl Rating {
    pub const UNRATED: Rating = Rating(0);
    pub const MAX: u8 = 5;

    pub fn new(value: i16) -> Result<Self, RatingOutOfRange> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(RatingOutOfRange(value)),
        }
    }

    /// Accept only `1..=5`; an unrated value is rejected like an out-of-range one.
    pub fn require_rated(value: i16) -> Result<Self, RatingOutOfRange> {
        let rating = Self::new(value)?;
        if rating.is_rated() {
            Ok(rating)
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i16> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i16 {
    fn from(rating: Rating) -> Self {
        i16::from(rating.0)
    }
}
