//! Process configuration, read once from the environment at start-up.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Everything the binary needs to bind, connect and shut down.
///
/// Bad values panic inside [`ServerConfig::from_env`]; the server never
/// starts half-configured.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// How long in-flight requests may run after SIGINT/SIGTERM.
    pub shutdown_timeout_secs: u64,
    pub database_url: String,
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Reads:
    ///
    /// | Variable                | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `DATABASE_URL`          | required                |
    /// | `DB_MAX_CONNECTIONS`    | `20`                    |
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", 3000),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173")),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_parse("SHUTDOWN_TIMEOUT_SECS", 30),
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 20),
        }
    }

    /// Socket address built from `host` and `port`.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip: IpAddr = self
            .host
            .parse()
            .unwrap_or_else(|e| panic!("HOST '{}' is not an IP address: {e}", self.host));
        SocketAddr::new(ip, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
