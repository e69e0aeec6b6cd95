//! Server configuration, sourced from the environment.

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server.
///
/// Everything defaults to a value usable for local development; a
/// deployment overrides via environment variables. `DATABASE_URL` and
/// `JWT_SECRET` are the only mandatory ones.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `8000`).
    pub port: u16,
    /// Allowed CORS origins (`CORS_ORIGINS`, comma-separated, default
    /// the Vite dev server).
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds (`REQUEST_TIMEOUT_SECS`, default `30`).
    pub request_timeout_secs: u64,
    /// Token signing settings, see [`JwtConfig::from_env`].
    pub jwt: JwtConfig,
}

/// Read an env var and parse it, falling back to `default` when unset.
///
/// # Panics
///
/// Panics when the variable is set but does not parse; bad configuration
/// should stop the process at startup.
fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} is set but could not be parsed: {raw:?}")),
        Err(_) => default,
    }
}

impl ServerConfig {
    /// Load the full configuration from the environment.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            host,
            port: env_parsed("PORT", 8000),
            cors_origins,
            request_timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}
