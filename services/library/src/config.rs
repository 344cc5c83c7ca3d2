use serde::Deserialize;

use ink_core::config::Config;

/// Library service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct LibraryConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret shared with the auth service. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3114). Env var: `LIBRARY_PORT`.
    #[serde(default = "default_library_port")]
    pub library_port: u16,
}

fn default_library_port() -> u16 {
    3114
}

impl Config for LibraryConfig {}
