use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BookTags::BookId).uuid().not_null())
                    .col(ColumnDef::new(BookTags::TagId).uuid().not_null())
                    .primary_key(Index::create().col(BookTags::BookId).col(BookTags::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookTags::Table, BookTags::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookTags::Table, BookTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The primary key covers lookups by book; this covers lookups by tag.
        manager
            .create_index(
                Index::create()
                    .name("idx_book_tags_tag_id")
                    .table(BookTags::Table)
                    .col(BookTags::TagId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookTags::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BookTags {
    Table,
    BookId,
    TagId,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}

#[derive(Iden)]
enum Tags {
    Table,
    Id,
}
