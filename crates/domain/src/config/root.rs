use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::pool::PoolConfig;
use super::query::QueryConfig;
use super::server::ServerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main process configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Number of primary resolvers turned into pooled DNS clients.
    /// 0 means every enabled resolver.
    #[serde(default)]
    pub maximum_dns_servers: usize,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub pool: PoolConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub maximum_dns_servers: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    /// Writes the default configuration when `path` does not exist.
    ///
    /// Returns `true` when the file was created, in which case the caller is
    /// expected to stop so the operator can review it.
    pub fn create_if_missing(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }

        let contents = toml::to_string_pretty(&Config::default())?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        })?;

        Ok(true)
    }

    pub fn load(path: &Path, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(max) = overrides.maximum_dns_servers {
            self.maximum_dns_servers = max;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let q = &self.query;
        if q.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query.query_timeout must be greater than 0".into(),
            ));
        }
        if q.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "query.max_attempts must be greater than 0".into(),
            ));
        }
        if q.burst == 0 {
            return Err(ConfigError::Validation(
                "query.burst must be greater than 0".into(),
            ));
        }
        if q.cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "query.cache_capacity must be greater than 0".into(),
            ));
        }
        if q.cache_clear_interval == 0 {
            return Err(ConfigError::Validation(
                "query.cache_clear_interval must be greater than 0".into(),
            ));
        }
        if self.pool.checkout_timeout == 0 || self.pool.retry_checkout_timeout == 0 {
            return Err(ConfigError::Validation(
                "pool timeouts must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
