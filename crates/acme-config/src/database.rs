//! Database connection settings.
//!
//! The seeder talks to a single PostgreSQL database through a pool that is
//! capped at one connection, never closes idle connections, and gives up on
//! establishing a connection after a bounded timeout.
//!
//! # Environment Variables
//!
//! - `POSTGRES_URL`: PostgreSQL connection string (required, `DATABASE_URL` is
//!   accepted as a fallback)
//! - `DATABASE_SSL_MODE`: `disable`, `allow`, `prefer`, `require`, `verify-ca`
//!   or `verify-full`. Takes precedence over an `sslmode` in the URL; when
//!   neither is given the mode is `require`.
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 1)
//! - `DATABASE_CONNECT_TIMEOUT_SECS`: connect timeout in seconds (default: 10)

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use sqlx::postgres::PgSslMode;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    /// Explicit mode from `DATABASE_SSL_MODE`, overriding the URL.
    pub ssl_mode: Option<PgSslMode>,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Builds a config for `url` with the production defaults.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ssl_mode: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Loads the config from process environment variables.
    ///
    /// Fails if neither `POSTGRES_URL` nor `DATABASE_URL` is set, or if
    /// `DATABASE_SSL_MODE` is not a recognised mode.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("POSTGRES_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow!("POSTGRES_URL (or DATABASE_URL) must be set"))?;

        let ssl_mode = lookup("DATABASE_SSL_MODE")
            .map(|mode| {
                PgSslMode::from_str(&mode)
                    .with_context(|| format!("invalid DATABASE_SSL_MODE: {mode}"))
            })
            .transpose()?;

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let connect_timeout = lookup("DATABASE_CONNECT_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT);

        Ok(Self {
            url,
            ssl_mode,
            max_connections,
            connect_timeout,
        })
    }

    /// Mode to force on the connection, if any.
    ///
    /// `DATABASE_SSL_MODE` wins. Otherwise an `sslmode` in the URL is left
    /// alone, and a URL without one gets `require`.
    pub fn ssl_mode_override(&self) -> Option<PgSslMode> {
        match self.ssl_mode {
            Some(mode) => Some(mode),
            None if self.url_sets_ssl_mode() => None,
            None => Some(PgSslMode::Require),
        }
    }

    fn url_sets_ssl_mode(&self) -> bool {
        self.url.split_once('?').is_some_and(|(_, query)| {
            query
                .split('&')
                .any(|param| param.starts_with("sslmode=") || param.starts_with("ssl-mode="))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            DatabaseConfig::from_lookup(lookup_from(&[("POSTGRES_URL", "postgres://db/acme")]))
                .unwrap();

        assert_eq!(config.url, "postgres://db/acme");
        assert!(config.ssl_mode.is_none());
        assert!(matches!(config.ssl_mode_override(), Some(PgSslMode::Require)));
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_falls_back_to_database_url() {
        let config =
            DatabaseConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://fallback")]))
                .unwrap();
        assert_eq!(config.url, "postgres://fallback");
    }

    #[test]
    fn test_postgres_url_wins_over_database_url() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("POSTGRES_URL", "postgres://primary"),
            ("DATABASE_URL", "postgres://fallback"),
        ]))
        .unwrap();
        assert_eq!(config.url, "postgres://primary");
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let err = DatabaseConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("POSTGRES_URL"));
    }

    #[test]
    fn test_blank_url_is_an_error() {
        assert!(DatabaseConfig::from_lookup(lookup_from(&[("POSTGRES_URL", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("POSTGRES_URL", "postgres://db"),
            ("DATABASE_SSL_MODE", "disable"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("DATABASE_CONNECT_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert!(matches!(config.ssl_mode, Some(PgSslMode::Disable)));
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_zero_connections_uses_default() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("POSTGRES_URL", "postgres://db"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_invalid_ssl_mode_is_an_error() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[
            ("POSTGRES_URL", "postgres://db"),
            ("DATABASE_SSL_MODE", "sometimes"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_url_ssl_mode_is_kept_without_override() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[(
            "POSTGRES_URL",
            "postgres://db/acme?sslmode=disable",
        )]))
        .unwrap();

        assert!(config.ssl_mode_override().is_none());
    }

    #[test]
    fn test_env_ssl_mode_wins_over_url() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("POSTGRES_URL", "postgres://db/acme?application_name=seed&sslmode=disable"),
            ("DATABASE_SSL_MODE", "verify-full"),
        ]))
        .unwrap();

        assert!(matches!(config.ssl_mode_override(), Some(PgSslMode::VerifyFull)));
    }

    #[test]
    fn test_other_query_params_still_require_ssl() {
        let config = DatabaseConfig::new("postgres://db/acme?application_name=seed");

        assert!(matches!(config.ssl_mode_override(), Some(PgSslMode::Require)));
    }
}
