//! Status command - probe a running gateway.

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use erp_console_core::{BearerToken, Config, NavigationTable, SessionContext};

use crate::ui::{self, HealthStatus};

/// Status command arguments.
#[derive(Debug, Clone, Default)]
pub struct StatusArgs {
    /// Port override.
    pub port: Option<u16>,
    /// Token to verify through the gateway.
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Health {
    status: String,
    version: String,
}

/// Run the status command.
pub async fn run_status(args: StatusArgs) -> Result<()> {
    ui::header("ERP Console Status");

    let config = match super::load_config(None) {
        Ok(config) => {
            println!();
            ui::info("Configuration");
            ui::health_check("Config", HealthStatus::Ok, Some("loaded"));
            config
        }
        Err(e) => {
            println!();
            ui::info("Configuration");
            ui::health_check("Config", HealthStatus::Error, Some(&e.to_string()));
            Config::default().with_env_overrides()
        }
    };
    ui::kv("  Upstream", &config.upstream.base_url);

    let port = args.port.unwrap_or(config.gateway.port);
    let base = format!(
        "http://{}:{port}",
        super::probe_host(&config.gateway.bind_address)
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    println!();
    ui::info("Gateway");
    match probe_health(&client, &base).await {
        Ok(health) => {
            ui::health_check("Status", HealthStatus::Ok, Some(&health.status));
            ui::kv("  Address", &base);
            ui::kv("  Version", &health.version);
        }
        Err(e) => {
            ui::health_check("Status", HealthStatus::Warning, Some("not running"));
            tracing::debug!("Health probe failed: {}", e);
            ui::info("  Start with: erp-console serve");
            return Ok(());
        }
    }

    if let Some(token) = args.token {
        println!();
        ui::info("Session");
        let token = BearerToken::new(token);
        match probe_session(&client, &base, token).await {
            Ok(session) if session.is_authenticated() => {
                let who = session
                    .user_field("username")
                    .unwrap_or("unknown user")
                    .to_string();
                ui::health_check("Token", HealthStatus::Ok, Some(&who));
                ui::kv("  Navigation", &visible_labels(&NavigationTable::builtin(), &session));
            }
            Ok(_) => {
                ui::health_check("Token", HealthStatus::Error, Some("rejected"));
            }
            Err(e) => {
                ui::health_check("Token", HealthStatus::Error, Some(&e));
            }
        }
    }

    Ok(())
}

/// Labels of the top navigation entries shown to `session`.
fn visible_labels(table: &NavigationTable, session: &SessionContext) -> String {
    table
        .visible_nav_entries(session)
        .iter()
        .map(|e| e.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

async fn probe_health(client: &reqwest::Client, base: &str) -> Result<Health, reqwest::Error> {
    client
        .get(format!("{base}/health"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Verify `token` through the gateway's verify route.
///
/// A rejected token yields an anonymous session; the error text is the
/// gateway's message.
async fn probe_session(
    client: &reqwest::Client,
    base: &str,
    token: BearerToken,
) -> Result<SessionContext, String> {
    let response = client
        .get(format!("{base}/api/auth/verify"))
        .bearer_auth(token.expose())
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    let body: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;

    let mut session = SessionContext::default();
    if status.is_success() {
        let user = body.get("user").cloned().unwrap_or(serde_json::Value::Null);
        session.populate(token, user);
        return Ok(session);
    }

    match body.get("error").and_then(serde_json::Value::as_str) {
        Some(message) => Err(message.to_string()),
        None => Ok(session),
    }
}
