//! Configuration loading and validation.
//!
//! Config is JSON5. Location: `$ERP_CONSOLE_STATE_DIR/console.json`,
//! falling back to `~/.erp-console/console.json`. A missing file yields
//! defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the upstream API base URL.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
/// Environment variable overriding the gateway port.
pub const PORT_ENV: &str = "ERP_CONSOLE_PORT";
/// Environment variable overriding the gateway bind address.
pub const BIND_ENV: &str = "ERP_CONSOLE_BIND";
/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "ERP_CONSOLE_STATE_DIR";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON5 parsing error.
    #[error("Parse error: {0}")]
    Parse(#[from] json5::Error),

    /// Config validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Gateway listener configuration.
    #[serde(default)]
    pub gateway: GatewaySection,

    /// Upstream API configuration.
    #[serde(default)]
    pub upstream: UpstreamSection,

    /// Token and cookie handling.
    #[serde(default)]
    pub auth: AuthSection,

    /// Edge route guard.
    #[serde(default)]
    pub guard: GuardSection,

    /// Global settings.
    #[serde(default)]
    pub settings: GlobalSettings,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns error if config exists but cannot be loaded or parsed.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = json5::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a path.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        Self::state_dir().join("console.json")
    }

    /// Get the console state directory.
    ///
    /// Uses `ERP_CONSOLE_STATE_DIR` env var if set, otherwise `~/.erp-console`.
    #[must_use]
    pub fn state_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(STATE_DIR_ENV) {
            PathBuf::from(dir)
        } else if let Some(home) = dirs::home_dir() {
            home.join(".erp-console")
        } else {
            PathBuf::from(".erp-console")
        }
    }

    /// Apply environment variable overrides.
    ///
    /// `BACKEND_URL` replaces the upstream base URL; `ERP_CONSOLE_PORT` and
    /// `ERP_CONSOLE_BIND` replace the listener address. Unparseable values are
    /// ignored with a warning.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                self.upstream.base_url = url;
            }
        }

        if let Ok(port) = std::env::var(PORT_ENV) {
            match port.parse() {
                Ok(port) => self.gateway.port = port,
                Err(_) => tracing::warn!("Ignoring invalid {}: {}", PORT_ENV, port),
            }
        }

        if let Ok(bind) = std::env::var(BIND_ENV) {
            self.gateway.bind_address = bind;
        }

        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.port == 0 {
            return Err(ConfigError::Validation(
                "Gateway port cannot be 0".to_string(),
            ));
        }

        let base = &self.upstream.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "Upstream base URL must be http(s): {base}"
            )));
        }

        if !self.auth.login_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "Login path must start with '/': {}",
                self.auth.login_path
            )));
        }

        if self.auth.cookie_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Cookie name cannot be empty".to_string(),
            ));
        }

        if let Some(path) = self
            .guard
            .extra_protected_paths
            .iter()
            .find(|p| !p.starts_with('/'))
        {
            return Err(ConfigError::Validation(format!(
                "Protected path must start with '/': {path}"
            )));
        }

        Ok(())
    }
}

/// Gateway listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewaySection {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Enable permissive CORS.
    #[serde(default = "default_true")]
    pub cors: bool,

    /// Directory of built console pages served behind the route guard.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            cors: true,
            static_dir: None,
        }
    }
}

const fn default_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

const fn default_true() -> bool {
    true
}

/// Upstream API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamSection {
    /// Base URL of the upstream API server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds. `0` uses the HTTP client default.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

/// Token and cookie handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSection {
    /// Name of the cookie carrying the bearer token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Mirror the token from a successful login into a cookie.
    #[serde(default = "default_true")]
    pub set_cookie_on_login: bool,

    /// Mark the token cookie `Secure`.
    #[serde(default)]
    pub cookie_secure: bool,

    /// Login page that unauthenticated page requests are redirected to.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Query parameter carrying the originally requested path.
    #[serde(default = "default_redirect_param")]
    pub redirect_param: String,
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            set_cookie_on_login: true,
            cookie_secure: false,
            login_path: default_login_path(),
            redirect_param: default_redirect_param(),
        }
    }
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_redirect_param() -> String {
    "redirect".to_string()
}

/// Edge route guard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardSection {
    /// Prefixes protected in addition to those derived from navigation.
    #[serde(default)]
    pub extra_protected_paths: Vec<String>,
}

/// Global settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Enable debug logging.
    #[serde(default)]
    pub debug: bool,

    /// Log format.
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format.
    #[default]
    Pretty,
    /// JSON format.
    Json,
}
