//! Host configuration for the monitored remote
//!
//! Three values (host, port, username) plus an optional SSH identity
//! file, loaded from a TOML file. The value is constructed once at startup
//! and passed into the session layer explicitly; there is no process-wide
//! singleton.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default remote host
pub const DEFAULT_HOST: &str = "localhost";

/// Default SSH port
pub const DEFAULT_PORT: u16 = 22;

/// Placeholder username used when no configuration is available
pub const DEFAULT_USERNAME: &str = "my_username";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

/// Connection parameters for the monitored host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Remote hostname or IP
    #[serde(default = "default_host")]
    pub host: String,
    /// SSH port
    #[serde(default = "default_port")]
    pub port: u16,
    /// SSH username
    #[serde(default = "default_username")]
    pub username: String,
    /// Optional path to an SSH private key; `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_file: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: default_username(),
            identity_file: None,
        }
    }
}

impl HostConfig {
    /// Returns the SSH destination in `user@host` form
    #[must_use]
    pub fn destination(&self) -> String {
        format!("{}@{}", self.username, self.host)
    }

    /// Returns the identity file path with `~` expanded, if configured
    #[must_use]
    pub fn identity_path(&self) -> Option<PathBuf> {
        self.identity_file
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
    }

    /// Default config file location (`<config_dir>/dockwatch/config.toml`)
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dockwatch").join("config.toml"))
    }

    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads the configuration, falling back to defaults.
    ///
    /// A missing file (or no resolvable config directory) yields the
    /// defaults; a present-but-malformed file is an error so a typo does
    /// not silently monitor the wrong host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file cannot be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if resolved.exists() {
            Self::load(&resolved)
        } else {
            tracing::debug!(path = %resolved.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }
}
