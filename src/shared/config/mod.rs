//! Application configuration module
//!
//! Provides the configuration consumed by the server: listening port,
//! database binding, the site-wide authentication flag and the directory
//! holding the built static site.
//!
//! Values come from the environment (see [`AppConfig::from_env`]) or from the
//! builder in tests.

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable holding the listening port
pub const ENV_SERVER_PORT: &str = "SERVER_PORT";
/// Environment variable holding the database URL
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable holding the authentication flag
pub const ENV_AUTHENTICATED: &str = "SITE_AUTHENTICATED";
/// Environment variable holding the static site directory
pub const ENV_PUBLIC_DIR: &str = "PUBLIC_DIR";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the server listens on
    pub server_port: u16,
    /// Database binding; `None` means "not configured"
    pub database_url: Option<String>,
    /// Whether visitors are treated as signed in
    pub authenticated: bool,
    /// Directory served for every non-API path
    pub public_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            database_url: None,
            authenticated: false,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from process environment variables
    ///
    /// Unset variables fall back to defaults; set-but-malformed values are
    /// errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(raw) = lookup(ENV_SERVER_PORT) {
            let port = raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: ENV_SERVER_PORT,
                value: raw.clone(),
            })?;
            builder = builder.server_port(port);
        }

        if let Some(url) = lookup(ENV_DATABASE_URL).filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }

        if let Some(raw) = lookup(ENV_AUTHENTICATED) {
            builder = builder.authenticated(parse_flag(ENV_AUTHENTICATED, &raw)?);
        }

        if let Some(dir) = lookup(ENV_PUBLIC_DIR) {
            builder = builder.public_dir(dir);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_port == 0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_SERVER_PORT,
                value: "0".to_string(),
            });
        }
        if let Some(url) = &self.database_url {
            if !url.starts_with("sqlite:") {
                return Err(ConfigError::InvalidValue {
                    key: ENV_DATABASE_URL,
                    value: url.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_port: Option<u16>,
    database_url: Option<String>,
    authenticated: Option<bool>,
    public_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the listening port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the authentication flag
    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = Some(authenticated);
        self
    }

    /// Set the static site directory
    pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_port: self.server_port.unwrap_or(defaults.server_port),
            database_url: self.database_url,
            authenticated: self.authenticated.unwrap_or(defaults.authenticated),
            public_dir: self.public_dir.unwrap_or(defaults.public_dir),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
