// ABOUTME: Tenant and credential configuration for groupctl
// ABOUTME: TOML config file under the home directory with environment variable overrides

pub mod constants;

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default Microsoft Graph endpoint
pub const DEFAULT_GRAPH_URL: &str = "https://graph.microsoft.com";

/// Default Microsoft identity platform endpoint
pub const DEFAULT_LOGIN_URL: &str = "https://login.microsoftonline.com";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not configured. Set the {1} environment variable or add it to ~/.groupctl/config.toml")]
    Missing(&'static str, &'static str),

    #[error("Invalid timeout value '{0}': must be a positive number of seconds")]
    InvalidTimeout(String),

    #[error("{0} must use https, got: {1}")]
    InsecureUrl(&'static str, String),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file format: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Connection settings for the Microsoft Graph tenant groupctl operates on.
///
/// Values are resolved in two passes: the optional config file at
/// `~/.groupctl/config.toml` first, then environment variables on top.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_graph_url")]
    pub graph_base_url: String,
    #[serde(default = "default_login_url")]
    pub login_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_graph_url() -> String {
    DEFAULT_GRAPH_URL.to_string()
}

fn default_login_url() -> String {
    DEFAULT_LOGIN_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            tenant_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            graph_base_url: default_graph_url(),
            login_base_url: default_login_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GraphConfig {
    /// Get the path of the configuration file
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".groupctl").join("config.toml"))
    }

    /// Load configuration: config file (when present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => {
                tracing::debug!("No config file found, using environment only");
                Self::default()
            }
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_env(&mut self) {
        if let Ok(tenant_id) = env::var(constants::GROUPCTL_TENANT_ID) {
            self.tenant_id = tenant_id;
        }
        if let Ok(client_id) = env::var(constants::GROUPCTL_CLIENT_ID) {
            self.client_id = client_id;
        }
        if let Ok(client_secret) = env::var(constants::GROUPCTL_CLIENT_SECRET) {
            self.client_secret = client_secret;
        }
        if let Ok(graph_url) = env::var(constants::GROUPCTL_GRAPH_URL) {
            self.graph_base_url = graph_url;
        }
        if let Ok(login_url) = env::var(constants::GROUPCTL_LOGIN_URL) {
            self.login_base_url = login_url;
        }
        if let Ok(timeout) = env::var(constants::GROUPCTL_HTTP_TIMEOUT_SECS) {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => tracing::warn!("Ignoring invalid {}: {}", constants::GROUPCTL_HTTP_TIMEOUT_SECS, timeout),
            }
        }
    }

    /// Validate that the configuration is complete enough to reach the tenant
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tenant_id.is_empty() {
            return Err(ConfigError::Missing("Tenant ID", constants::GROUPCTL_TENANT_ID));
        }
        if self.client_id.is_empty() {
            return Err(ConfigError::Missing("Client ID", constants::GROUPCTL_CLIENT_ID));
        }
        if self.client_secret.is_empty() {
            return Err(ConfigError::Missing(
                "Client secret",
                constants::GROUPCTL_CLIENT_SECRET,
            ));
        }
        if !self.graph_base_url.starts_with("https://") {
            return Err(ConfigError::InsecureUrl(
                "Graph URL",
                self.graph_base_url.clone(),
            ));
        }
        if !self.login_base_url.starts_with("https://") {
            return Err(ConfigError::InsecureUrl(
                "Login URL",
                self.login_base_url.clone(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs.to_string()));
        }
        Ok(())
    }
}
