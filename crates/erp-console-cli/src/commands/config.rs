//! Config command - show, validate and locate the configuration.

use std::path::PathBuf;

use anyhow::Result;

use erp_console_core::Config;

use crate::ui;

/// Config actions.
#[derive(Debug, Clone, Copy, Default)]
pub enum ConfigAction {
    /// Print the effective configuration.
    #[default]
    Show,
    /// Validate the config file.
    Validate,
    /// Print the config file location.
    Path,
}

/// Config command arguments.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Action to run.
    pub action: ConfigAction,
    /// Config file override.
    pub path: Option<PathBuf>,
}

/// Run the config command.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(Config::default_path);

    match args.action {
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Show => show_config(&path),
        ConfigAction::Validate => validate_config(&path),
    }
}

/// Show the effective configuration, defaults and env overrides included.
fn show_config(path: &std::path::Path) -> Result<()> {
    let config = if path.exists() {
        Config::load(path)?
    } else {
        ui::warning(&format!("Config file not found: {}", path.display()));
        ui::info("Showing defaults");
        Config::default()
    };

    println!("{}", serde_json::to_string_pretty(&config.with_env_overrides())?);
    Ok(())
}

fn validate_config(path: &std::path::Path) -> Result<()> {
    if !path.exists() {
        ui::warning(&format!("Config file not found: {}", path.display()));
        ui::info("Defaults are in use");
        return Ok(());
    }

    match Config::load(path) {
        Ok(_) => {
            ui::success(&format!("Configuration is valid: {}", path.display()));
            Ok(())
        }
        Err(e) => {
            ui::error(&format!("Invalid configuration: {e}"));
            anyhow::bail!("validation failed for {}", path.display())
        }
    }
}
