use sea_orm::Database;
use tracing::info;

use ink_auth_types::token::JwtSecret;
use ink_core::config::Config;
use ink_library::config::LibraryConfig;
use ink_library::router::build_router;
use ink_library::state::AppState;

#[tokio::main]
async fn main() {
    ink_core::tracing::init_tracing();

    let config = LibraryConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.library_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("library service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
