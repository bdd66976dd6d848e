use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::lists::ListsConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::web::WebConfig;

/// Main configuration structure for Listkeeper
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address, body limit)
    #[serde(default)]
    pub server: ServerConfig,

    /// Backing files for the blocklist and allowlist
    #[serde(default)]
    pub lists: ListsConfig,

    /// Static frontend
    #[serde(default)]
    pub web: WebConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. listkeeper.toml in current directory
    /// 3. /etc/listkeeper/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("listkeeper.toml").exists() {
            Self::from_file("listkeeper.toml")?
        } else if std::path::Path::new("/etc/listkeeper/config.toml").exists() {
            Self::from_file("/etc/listkeeper/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.blocklist_path {
            self.lists.blocklist_path = path;
        }
        if let Some(path) = overrides.allowlist_path {
            self.lists.allowlist_path = path;
        }
        if let Some(dir) = overrides.static_dir {
            self.web.static_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::Validation(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }

        if self.lists.blocklist_path.trim().is_empty()
            || self.lists.allowlist_path.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "List paths cannot be empty".to_string(),
            ));
        }

        if self.lists.blocklist_path == self.lists.allowlist_path {
            return Err(ConfigError::Validation(format!(
                "Blocklist and allowlist share the same file: {}",
                self.lists.blocklist_path
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub blocklist_path: Option<String>,
    pub allowlist_path: Option<String>,
    pub static_dir: Option<String>,
    pub log_level: Option<String>,
}
