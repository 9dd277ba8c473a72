//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_REDIS_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_IDLE_SECONDS, SESSION_STORE_MEMORY, SESSION_STORE_REDIS,
};

/// Where session state is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    Redis,
    Memory,
}

impl FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            SESSION_STORE_REDIS => Ok(SessionBackend::Redis),
            SESSION_STORE_MEMORY => Ok(SessionBackend::Memory),
            other => Err(format!("unknown session store '{}'", other)),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub session_backend: SessionBackend,
    pub session_idle_seconds: u64,
    pub cookie_secure: bool,
    pub api_require_session: bool,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("redis_url", &"[REDACTED]")
            .field("session_backend", &self.session_backend)
            .field("session_idle_seconds", &self.session_idle_seconds)
            .field("cookie_secure", &self.cookie_secure)
            .field("api_require_session", &self.api_require_session)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            session_backend: SessionBackend::Redis,
            session_idle_seconds: DEFAULT_SESSION_IDLE_SECONDS,
            cookie_secure: false,
            api_require_session: false,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults in
    /// [`super::constants`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let session_backend = match env::var("SESSION_STORE") {
            Ok(value) => value.parse().unwrap_or_else(|e: String| {
                tracing::warn!("{}, falling back to redis", e);
                SessionBackend::Redis
            }),
            Err(_) => defaults.session_backend,
        };

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            session_backend,
            session_idle_seconds: idle_seconds(parse_var("SESSION_IDLE_SECONDS"))
                .unwrap_or(defaults.session_idle_seconds),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cookie_secure),
            api_require_session: env::var("API_REQUIRE_SESSION")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.api_require_session),
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// A zero idle period would expire sessions on creation; Redis also
/// rejects `SET EX 0`.
fn idle_seconds(value: Option<u64>) -> Option<u64> {
    match value {
        Some(0) => {
            tracing::warn!(
                "SESSION_IDLE_SECONDS must be at least 1, using {}",
                DEFAULT_SESSION_IDLE_SECONDS
            );
            None
        }
        other => other,
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_backend_parse() {
        assert_eq!("redis".parse::<SessionBackend>(), Ok(SessionBackend::Redis));
        assert_eq!(" Memory ".parse::<SessionBackend>(), Ok(SessionBackend::Memory));
        assert!("memcached".parse::<SessionBackend>().is_err());
    }

    #[test]
    fn test_zero_idle_period_falls_back() {
        assert_eq!(idle_seconds(Some(0)), None);
        assert_eq!(idle_seconds(Some(1)), Some(1));
        assert_eq!(idle_seconds(None), None);
        assert_eq!(
            idle_seconds(Some(0)).unwrap_or(Config::default().session_idle_seconds),
            DEFAULT_SESSION_IDLE_SECONDS
        );
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("ON"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_debug_redacts_urls() {
        let config = Config::default();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("postgres://"));
        assert!(!debug.contains("redis://"));
        assert!(debug.contains("session_idle_seconds: 3600"));
    }
}
