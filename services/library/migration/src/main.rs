use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(ink_library_migration::Migrator).await;
}
