//! Configuration management for the Mowa server
//!
//! Layers built-in defaults, an optional YAML file and `MOWA_` environment
//! variables. Everything here is trusted administrator input and is fixed
//! once the server starts.

use config::{Config, ConfigError, Environment, File, FileFormat};
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STORAGE_DIR: &str = "./storage";

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    /// Environment: MOWA_BIND_ADDRESS
    pub bind_address: String,

    /// HTTP port.
    /// Environment: MOWA_PORT
    pub port: u16,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Root directory for storage operations.
    /// Environment: MOWA_STORAGE__DIR
    #[serde(default)]
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MessagesConfig {
    /// Named recipient groups, expanded wherever a recipient is accepted.
    #[serde(default)]
    pub groups: HashMap<String, Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            storage: StorageConfig {
                dir: DEFAULT_STORAGE_DIR.to_string(),
            },
            messages: MessagesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional YAML file with environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::from_sources(path, Some(Self::environment()))?;

        match path {
            Some(path) => info!(
                "Configuration loaded from {} with {} message groups and storage dir: {}",
                path.display(),
                config.messages.groups.len(),
                config.storage.dir
            ),
            None => info!(
                "Using default configuration with storage dir: {}",
                config.storage.dir
            ),
        }

        Ok(config)
    }

    /// `MOWA_` variables, with `__` separating nested keys.
    fn environment() -> Environment {
        Environment::with_prefix("MOWA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_sources(
        path: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("storage.dir", DEFAULT_STORAGE_DIR)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
        }

        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        if config.storage.dir.trim().is_empty() {
            config.storage.dir = DEFAULT_STORAGE_DIR.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Message(format!(
                "bind_address '{}' is not a valid IP address",
                self.bind_address
            )));
        }

        Ok(())
    }

    /// Get bind address and port as socket address string
    pub fn socket_addr(&self) -> String {
        match self.bind_address.parse::<IpAddr>() {
            Ok(IpAddr::V6(ip)) => format!("[{}]:{}", ip, self.port),
            _ => format!("{}:{}", self.bind_address, self.port),
        }
    }

    /// Get storage directory as PathBuf
    pub fn storage_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.dir)
    }
}
