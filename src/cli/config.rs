//! Configuration file
//!
//! ```json
//! {
//!   "data_file": "archives/AdventureWorks_Products.csv",
//!   "server": { "host": "0.0.0.0", "port": 8080, "cors_origins": [] },
//!   "logging": { "level": "info", "format": "text", "file": null }
//! }
//! ```
//!
//! Precedence, lowest to highest: built-in defaults, config file, `PORT`
//! environment variable, command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::args::CommonArgs;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::{build_filter, LoggingConfig};

/// Config file read when `--config` is not given, if it exists
pub const DEFAULT_CONFIG_PATH: &str = "./catalogdb.json";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV data file backing the catalog
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("archives/AdventureWorks_Products.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            server: HttpServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Resolve the effective configuration for a command.
    ///
    /// An explicit `--config` must exist; the default path is optional.
    pub fn resolve(
        args: &CommonArgs,
        port: Option<u16>,
        env_port: Option<String>,
    ) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        if let Some(value) = env_port {
            config.server.port = value.trim().parse().map_err(|_| {
                CliError::config_error(format!("Invalid PORT environment variable: '{}'", value))
            })?;
        }
        if let Some(data_file) = &args.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        build_filter(&self.logging.level)
            .map_err(|e| CliError::config_error(e.to_string()))?;

        Ok(())
    }
}
