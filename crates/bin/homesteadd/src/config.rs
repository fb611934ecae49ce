//! Daemon settings: `homestead.toml` first, then `HOMESTEAD_*` variables.
//!
//! The file is optional and every key has a default, so an empty working
//! directory still yields a runnable daemon listening on port 3000.

use std::path::Path;

use serde::Deserialize;

use homestead_adapter_storage_sqlite_sqlx::pool::{self, DEFAULT_MAX_CONNECTIONS};

const CONFIG_FILE: &str = "homestead.toml";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite:homestead.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "homesteadd=info,homestead=info,tower_http=debug";

/// Everything `homesteadd` needs to start.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Listing store location and pool size.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx` `SQLite` URL; `sqlite::memory:` keeps everything in RAM.
    pub url: String,
    pub max_connections: u32,
}

/// `tracing` filter directive, in `RUST_LOG` syntax.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Config {
    /// Read `homestead.toml` from the working directory, overlay the process
    /// environment and check the result.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when the
    /// merged settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::read(Path::new(CONFIG_FILE))?;
        config.overlay_env(|key| std::env::var(key).ok());
        config.check()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        Ok(toml::from_str(&text)?)
    }

    /// Apply overrides looked up through `lookup`. Later keys win, so
    /// `HOMESTEAD_BIND` beats `HOMESTEAD_HOST`/`HOMESTEAD_PORT` and `RUST_LOG`
    /// beats `HOMESTEAD_LOG`. Unparsable ports are ignored.
    fn overlay_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let parse_port = |text: &str| text.parse::<u16>().ok();

        if let Some(host) = lookup("HOMESTEAD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("HOMESTEAD_PORT").as_deref().and_then(parse_port) {
            self.server.port = port;
        }
        if let Some(bind) = lookup("HOMESTEAD_BIND")
            && let Some((host, rest)) = bind.rsplit_once(':')
        {
            self.server.host = host.to_string();
            self.server.port = parse_port(rest).unwrap_or(self.server.port);
        }
        if let Some(url) = lookup("HOMESTEAD_DATABASE_URL") {
            self.database.url = url;
        }
        for key in ["HOMESTEAD_LOG", "RUST_LOG"] {
            if let Some(filter) = lookup(key) {
                self.logging.filter = filter;
            }
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(())
    }

    /// `host:port` for the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    /// Settings for the storage adapter.
    #[must_use]
    pub fn storage(&self) -> pool::Config {
        pool::Config {
            database_url: self.url.clone(),
            max_connections: self.max_connections,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Why the daemon refused its settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read homestead.toml")]
    Io(#[source] std::io::Error),
    #[error("cannot parse homestead.toml")]
    Parse(#[from] toml::de::Error),
    #[error("server.port must be non-zero")]
    ZeroPort,
    #[error("database.max_connections must be non-zero")]
    EmptyPool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_start_from_usable_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database.max_connections, 5);
        assert!(config.check().is_ok());
    }

    #[test]
    fn should_read_every_section_from_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'
            max_connections = 2

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");

        let storage = config.database.storage();
        assert_eq!(storage.database_url, "sqlite:test.db");
        assert_eq!(storage.max_connections, 2);
    }

    #[test]
    fn should_fill_missing_keys_with_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn should_fall_back_to_defaults_without_a_file() {
        let config = Config::read(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn should_fail_on_malformed_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_refuse_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(config.check(), Err(ConfigError::ZeroPort)));
    }

    #[test]
    fn should_refuse_an_empty_pool() {
        let mut config = Config::default();
        config.database.max_connections = 0;
        assert!(matches!(config.check(), Err(ConfigError::EmptyPool)));
    }

    #[test]
    fn should_let_environment_override_file_values() {
        let mut config = Config::default();
        config.overlay_env(env(&[
            ("HOMESTEAD_BIND", "127.0.0.1:8081"),
            ("HOMESTEAD_DATABASE_URL", "sqlite::memory:"),
            ("HOMESTEAD_LOG", "warn"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let mut config = Config::default();
        config.overlay_env(env(&[
            ("HOMESTEAD_HOST", "10.0.0.1"),
            ("HOMESTEAD_PORT", "7000"),
            ("HOMESTEAD_BIND", "127.0.0.1:8081"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
    }

    #[test]
    fn should_prefer_rust_log_over_homestead_log() {
        let mut config = Config::default();
        config.overlay_env(env(&[("HOMESTEAD_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_ports() {
        let mut config = Config::default();
        config.overlay_env(env(&[
            ("HOMESTEAD_PORT", "eighty"),
            ("HOMESTEAD_BIND", "127.0.0.1:ninety"),
        ]));
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
