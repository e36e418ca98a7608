//! Environment-driven gateway configuration.

use shelf_store::DEFAULT_MAX_CONNECTIONS;

/// Default socket address the gateway binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Default SQLite database location.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shelf.db";

/// Where bookmarks are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// A SQLite database URL, e.g. `sqlite://shelf.db`.
    Sqlite(String),
    /// Process memory; contents are lost on exit.
    Memory,
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Runtime settings for the gateway binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Address to listen on (`SHELF_LISTEN_ADDR`).
    pub listen_addr: String,
    /// Storage backend (`SHELF_DATABASE_URL`, `memory` for in-process).
    pub database: DatabaseTarget,
    /// Pool size for SQLite (`SHELF_DB_MAX_CONNECTIONS`).
    pub max_connections: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            database: DatabaseTarget::Sqlite(DEFAULT_DATABASE_URL.to_owned()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl GatewayConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if `SHELF_DB_MAX_CONNECTIONS` is
    /// not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("SHELF_LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Some(url) = get("SHELF_DATABASE_URL") {
            config.database = if url.eq_ignore_ascii_case("memory") {
                DatabaseTarget::Memory
            } else {
                DatabaseTarget::Sqlite(url)
            };
        }

        if let Some(raw) = get("SHELF_DB_MAX_CONNECTIONS") {
            config.max_connections = match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "SHELF_DB_MAX_CONNECTIONS",
                        value: raw,
                        reason: "expected a positive integer",
                    })
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn unset_environment_yields_defaults() {
        let config = match GatewayConfig::from_lookup(lookup(&[])) {
            Ok(c) => c,
            Err(e) => panic!("defaults must load: {e}"),
        };
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.listen_addr, "127.0.0.1:8000");
    }

    #[test]
    fn memory_keyword_selects_memory_store() {
        let config = GatewayConfig::from_lookup(lookup(&[("SHELF_DATABASE_URL", "MEMORY")]));
        assert_eq!(config.ok().map(|c| c.database), Some(DatabaseTarget::Memory));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = match GatewayConfig::from_lookup(lookup(&[
            ("SHELF_LISTEN_ADDR", "0.0.0.0:9000"),
            ("SHELF_DATABASE_URL", "sqlite:///var/lib/shelf/db.sqlite"),
            ("SHELF_DB_MAX_CONNECTIONS", "12"),
        ])) {
            Ok(c) => c,
            Err(e) => panic!("valid config rejected: {e}"),
        };
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(
            config.database,
            DatabaseTarget::Sqlite("sqlite:///var/lib/shelf/db.sqlite".to_owned())
        );
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn zero_or_garbage_pool_size_is_rejected() {
        for raw in ["0", "-1", "lots"] {
            let result = GatewayConfig::from_lookup(lookup(&[("SHELF_DB_MAX_CONNECTIONS", raw)]));
            assert!(result.is_err(), "'{raw}' must be rejected");
        }
    }
}
