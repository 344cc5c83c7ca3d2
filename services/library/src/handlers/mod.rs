pub mod book;
pub mod health;
pub mod tag;
pub mod template;
