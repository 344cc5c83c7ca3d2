use sea_orm_migration::prelude::*;

mod m20261001_000001_create_books;
mod m20261001_000002_create_tags;
mod m20261001_000003_create_book_tags;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_books::Migration),
            Box::new(m20261001_000002_create_tags::Migration),
            Box::new(m20261001_000003_create_book_tags::Migration),
        ]
    }
}
