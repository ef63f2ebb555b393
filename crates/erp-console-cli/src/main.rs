//! ERP Console CLI - run and inspect the console gateway.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use erp_console_core::config::{GlobalSettings, LogFormat};

#[derive(Parser)]
#[command(name = "erp-console")]
#[command(about = "ERP Console - backend-for-frontend gateway")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address
        #[arg(long)]
        bind: Option<String>,

        /// Upstream API base URL
        #[arg(long)]
        backend_url: Option<String>,

        /// Config file (defaults to the state directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Probe a running gateway
    Status {
        /// Gateway port
        #[arg(short, long)]
        port: Option<u16>,

        /// Verify this bearer token through the gateway
        #[arg(long)]
        token: Option<String>,
    },

    /// Inspect the navigation table
    Nav {
        /// Show protected path prefixes
        #[arg(long)]
        protected: bool,

        /// Show sidebars
        #[arg(long)]
        sidebars: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,

        /// Config file (defaults to the state directory)
        #[arg(short, long, global = true)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Validate configuration
    Validate,

    /// Print the config file path
    Path,
}

fn init_logging(verbose: bool, settings: &GlobalSettings) {
    let filter = if verbose || settings.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    match settings.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_override = match &cli.command {
        Some(Commands::Serve { config, .. }) => config.clone(),
        _ => None,
    };
    let settings = commands::load_config(config_override.as_deref())
        .map(|c| c.settings)
        .unwrap_or_default();
    init_logging(cli.verbose, &settings);

    // No command: show status
    let Some(command) = cli.command else {
        return commands::run_status(commands::status::StatusArgs::default()).await;
    };

    match command {
        Commands::Serve {
            port,
            bind,
            backend_url,
            config,
        } => {
            let args = commands::serve::ServeArgs {
                port,
                bind,
                backend_url,
                config,
            };
            commands::run_serve(args).await?;
        }

        Commands::Status { port, token } => {
            let args = commands::status::StatusArgs { port, token };
            commands::run_status(args).await?;
        }

        Commands::Nav {
            protected,
            sidebars,
            json,
        } => {
            let args = commands::nav::NavArgs {
                protected,
                sidebars,
                json,
            };
            commands::run_nav(args)?;
        }

        Commands::Config { action, file } => {
            let action = match action {
                Some(ConfigCommands::Validate) => commands::config::ConfigAction::Validate,
                Some(ConfigCommands::Path) => commands::config::ConfigAction::Path,
                Some(ConfigCommands::Show) | None => commands::config::ConfigAction::Show,
            };
            commands::run_config(commands::config::ConfigArgs { action, path: file })?;
        }
    }

    Ok(())
}
