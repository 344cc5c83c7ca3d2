pub mod book;
pub mod tag;
