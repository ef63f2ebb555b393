//! Serve command - run the gateway server.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::ui;

/// Serve command arguments.
#[derive(Debug, Clone, Default)]
pub struct ServeArgs {
    /// Port to listen on.
    pub port: Option<u16>,
    /// Bind address.
    pub bind: Option<String>,
    /// Upstream API base URL.
    pub backend_url: Option<String>,
    /// Config file override.
    pub config: Option<PathBuf>,
}

/// Start the gateway server.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    if let Some(port) = args.port {
        config.gateway.port = port;
    }
    if let Some(bind) = args.bind {
        config.gateway.bind_address = bind;
    }
    if let Some(url) = args.backend_url {
        config.upstream.base_url = url;
    }
    config.validate().context("Invalid configuration")?;

    let address = format!("{}:{}", config.gateway.bind_address, config.gateway.port);

    // Check if port is already in use
    if std::net::TcpListener::bind(&address).is_err() {
        ui::error(&format!("Address {address} is already in use"));
        return Ok(());
    }

    ui::header("Starting ERP Console Gateway");
    ui::kv("Address", &address);
    ui::kv("Upstream", &config.upstream.base_url);
    if let Some(dir) = &config.gateway.static_dir {
        ui::kv("Pages", &dir.display().to_string());
    }
    println!();

    ui::info("Gateway is starting...");
    ui::info("Press Ctrl+C to stop");
    println!();

    erp_console_gateway::start(config).await?;

    Ok(())
}
