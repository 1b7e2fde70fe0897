use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const PORT: &str = "PORT";
pub const DB_URL: &str = "CONTACTS_DB_URL";
pub const DB_NAME: &str = "CONTACTS_DB_NAME";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

impl Environment {
    pub fn from_env() -> Self {
        Self::parse(env::var("APP_ENV").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        }
    }

    /// Log filter used when RUST_LOG is unset
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "contacts_api=debug,tower_http=debug,info",
            Environment::Staging => "contacts_api=info,tower_http=info,warn",
            Environment::Production => "contacts_api=info,warn",
        }
    }

    fn max_connections(&self) -> u32 {
        match self {
            Environment::Development => 10,
            Environment::Staging => 20,
            Environment::Production => 50,
        }
    }

    fn connection_timeout(&self) -> u64 {
        match self {
            Environment::Development => 30,
            Environment::Staging => 10,
            Environment::Production => 5,
        }
    }
}

impl AppConfig {
    /// Build from the process environment. Port, store URL and database name
    /// are required; the server must not start without them.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = Environment::parse(lookup("APP_ENV").as_deref());

        let port = parse_var(&lookup, PORT)?;
        let url = require(&lookup, DB_URL)?;
        let name = require(&lookup, DB_NAME)?;

        let mut database = DatabaseConfig {
            url,
            name,
            max_connections: environment.max_connections(),
            connection_timeout: environment.connection_timeout(),
        };

        // Optional overrides
        if lookup("CONTACTS_DB_MAX_CONNECTIONS").is_some() {
            database.max_connections = parse_var(&lookup, "CONTACTS_DB_MAX_CONNECTIONS")?;
        }
        if lookup("CONTACTS_DB_CONNECTION_TIMEOUT").is_some() {
            database.connection_timeout = parse_var(&lookup, "CONTACTS_DB_CONNECTION_TIMEOUT")?;
        }

        Ok(Self {
            environment,
            server: ServerConfig { port },
            database,
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<T, ConfigError> {
    let value = require(lookup, var)?;
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const COMPLETE: &[(&str, &str)] = &[
        ("PORT", "9000"),
        ("CONTACTS_DB_URL", "postgres://localhost:5432/postgres"),
        ("CONTACTS_DB_NAME", "contacts"),
    ];

    #[test]
    fn loads_required_settings() {
        let config = AppConfig::from_lookup(lookup(COMPLETE)).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.name, "contacts");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn refuses_to_start_when_any_setting_is_absent() {
        for missing in [PORT, DB_URL, DB_NAME] {
            let pairs: Vec<_> = COMPLETE.iter().copied().filter(|(k, _)| *k != missing).collect();
            let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert_eq!(err, ConfigError::Missing(missing));
        }
    }

    #[test]
    fn rejects_malformed_port() {
        let mut pairs = COMPLETE.to_vec();
        pairs[0] = ("PORT", "ninety");
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid { var: PORT, value: "ninety".into() }
        );
    }

    #[test]
    fn production_defaults_and_overrides() {
        let mut pairs = COMPLETE.to_vec();
        pairs.push(("APP_ENV", "prod"));
        let config = AppConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.database.max_connections, 50);

        pairs.push(("CONTACTS_DB_MAX_CONNECTIONS", "4"));
        let config = AppConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.database.max_connections, 4);
    }
}
