//! Configuration loading and representation.
//!
//! Everything comes from environment variables; there is no config file.
//!
//! | Variable | Default |
//! |---|---|
//! | `CATALOG_BIND_ADDR` | `0.0.0.0:8080` |
//! | `CATALOG_STORE` | `memory` (`memory`, `sqlite`, `postgres`) |
//! | `DATABASE_URL` | `sqlite://catalog.db?mode=rwc` for sqlite, required for postgres |
//! | `CATALOG_DB_MAX_CONNECTIONS` | `5` |

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SQLITE_URL: &str = "sqlite://catalog.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Which `CatalogStore` backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite,
    Postgres,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            "sqlite" => Ok(StoreBackend::Sqlite),
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            other => Err(ConfigError::Invalid {
                var: "CATALOG_STORE",
                reason: format!("unknown backend '{other}' (expected memory, sqlite or postgres)"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    /// Connection string; always `Some` for the SQL backends after loading.
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl CatalogConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("CATALOG_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "CATALOG_BIND_ADDR",
                reason: e.to_string(),
            })?;

        let store = match lookup("CATALOG_STORE") {
            Some(v) => v.parse()?,
            None => StoreBackend::Memory,
        };

        let database_url = match (store, lookup("DATABASE_URL")) {
            (StoreBackend::Memory, _) => None,
            (_, Some(url)) if !url.trim().is_empty() => Some(url),
            (StoreBackend::Sqlite, _) => Some(DEFAULT_SQLITE_URL.to_string()),
            (StoreBackend::Postgres, _) => return Err(ConfigError::Missing("DATABASE_URL")),
        };

        let max_connections = match lookup("CATALOG_DB_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        var: "CATALOG_DB_MAX_CONNECTIONS",
                        reason: "must be at least 1".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: "CATALOG_DB_MAX_CONNECTIONS",
                        reason: e.to_string(),
                    });
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            bind_addr,
            store,
            database_url,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<CatalogConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_to_in_memory_on_port_8080() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(cfg.store, StoreBackend::Memory);
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn sqlite_falls_back_to_local_file() {
        let cfg = load(&[("CATALOG_STORE", "sqlite")]).unwrap();
        assert_eq!(cfg.store, StoreBackend::Sqlite);
        assert_eq!(cfg.database_url.as_deref(), Some(DEFAULT_SQLITE_URL));
    }

    #[test]
    fn postgres_requires_database_url() {
        assert_eq!(
            load(&[("CATALOG_STORE", "postgres")]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );

        let cfg = load(&[
            ("CATALOG_STORE", "Postgres"),
            ("DATABASE_URL", "postgres://localhost/catalog"),
            ("CATALOG_DB_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(cfg.store, StoreBackend::Postgres);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/catalog"));
        assert_eq!(cfg.max_connections, 12);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[("CATALOG_STORE", "redis")]),
            Err(ConfigError::Invalid { var: "CATALOG_STORE", .. })
        ));
        assert!(matches!(
            load(&[("CATALOG_BIND_ADDR", "not-an-addr")]),
            Err(ConfigError::Invalid { var: "CATALOG_BIND_ADDR", .. })
        ));
        assert!(matches!(
            load(&[("CATALOG_DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid { var: "CATALOG_DB_MAX_CONNECTIONS", .. })
        ));
    }
}
