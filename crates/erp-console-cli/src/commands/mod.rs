//! CLI command implementations.

pub mod config;
pub mod nav;
pub mod serve;
pub mod status;

pub use config::run_config;
pub use nav::run_nav;
pub use serve::run_serve;
pub use status::run_status;

use std::path::Path;

use erp_console_core::{Config, ConfigError};

/// Load the configuration from `path`, or the default location, with
/// environment overrides applied.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read, parsed or validated.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    Ok(config.with_env_overrides())
}

/// Host to dial for a listener bound on `bind_address`.
pub fn probe_host(bind_address: &str) -> &str {
    match bind_address {
        "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_host() {
        assert_eq!(probe_host("0.0.0.0"), "127.0.0.1");
        assert_eq!(probe_host("::"), "127.0.0.1");
        assert_eq!(probe_host("10.0.0.5"), "10.0.0.5");
    }

    #[test]
    fn test_load_config_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.json");
        std::fs::write(&path, "{ gateway: { port: 4100 } }").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.gateway.port, 4100);
    }

    #[test]
    fn test_load_config_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.json"))).is_err());
    }
}
