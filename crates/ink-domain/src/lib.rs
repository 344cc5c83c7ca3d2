//! Domain types shared across all Ink Trace services.
//!
//! Pure types with no framework dependencies. Any layer may use them;
//! `Rating` also serves as the wire and store representation of a score.

pub mod rating;
pub mod template;
