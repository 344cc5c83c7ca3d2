use serde::Deserialize;

use ink_core::config::Config;

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing access and refresh tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Cookie domain attribute; empty for host-only cookies. Env var: `COOKIE_DOMAIN`.
    #[serde(default)]
    pub cookie_domain: String,
    /// The single email address permitted to sign up and sign in. Env var: `ALLOWED_EMAIL`.
    pub allowed_email: String,
    /// TCP port to listen on (default 3112). Env var: `AUTH_PORT`.
    #[serde(default = "default_auth_port")]
    pub auth_port: u16,
}

fn default_auth_port() -> u16 {
    3112
}

impl Config for AuthConfig {}
