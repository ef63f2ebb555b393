//! # ERP Console Gateway
//!
//! Backend-for-frontend server for the ERP administration console.
//!
//! Every `/api` route is a thin proxy to the upstream API server: the
//! caller's bearer token is resolved (header first, then cookie), verified
//! against the upstream, and forwarded; the upstream status and JSON body
//! are relayed back unchanged. Page requests pass through an edge guard that
//! redirects token-less visitors of protected paths to the login page.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Token resolution, verification, and the auth gate extractor.
pub mod auth;
mod error;
/// Edge route guard for page requests.
pub mod guard;
mod handlers;
mod server;
/// Authenticated forwarding to the upstream API.
pub mod upstream;

pub use auth::{AuthError, BearerAuth, RequireAuth, Verification};
pub use error::{ErrorBody, INTERNAL_ERROR_MESSAGE, ProxyError};
pub use guard::GuardDecision;
pub use server::{Gateway, GatewayBuilder, GatewayState, router};
pub use upstream::{ForwardOptions, UpstreamClient, UpstreamError, UpstreamResponse};

use erp_console_core::Config;

/// Start the gateway server.
///
/// # Errors
///
/// Returns error if server fails to start.
pub async fn start(config: Config) -> Result<(), GatewayError> {
    let gateway = Gateway::new(config)?;
    gateway.run().await
}

/// Gateway errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Server error.
    #[error("Server error: {0}")]
    Server(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
