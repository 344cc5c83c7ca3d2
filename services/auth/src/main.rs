use sea_orm::Database;
use tracing::info;

use ink_auth::config::AuthConfig;
use ink_auth::infra::events::BroadcastSessionEvents;
use ink_auth::router::build_router;
use ink_auth::state::AppState;
use ink_auth_types::token::JwtSecret;
use ink_core::config::Config;

#[tokio::main]
async fn main() {
    ink_core::tracing::init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret),
        cookie_domain: config.cookie_domain,
        allowed_email: config.allowed_email,
        session_events: BroadcastSessionEvents::default(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
