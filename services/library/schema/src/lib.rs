pub mod book_tags;
pub mod books;
pub mod tags;
