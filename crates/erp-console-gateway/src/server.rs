//! Gateway server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::Response,
    routing::get,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use erp_console_core::{Config, NavigationTable};

use crate::error::ErrorBody;
use crate::upstream::UpstreamClient;
use crate::{GatewayError, guard, handlers};

/// Gateway state shared across handlers.
///
/// Immutable after start; handlers only ever see it through an `Arc`.
#[derive(Debug)]
pub struct GatewayState {
    /// Gateway configuration.
    pub config: Config,
    /// Client for the upstream API.
    pub upstream: UpstreamClient,
    /// Navigation table.
    pub navigation: NavigationTable,
    /// Path prefixes guarded at the edge.
    pub protected_paths: Vec<String>,
}

impl GatewayState {
    /// State for `config` with the builtin navigation table.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream client cannot be built.
    pub fn new(config: Config) -> Result<Self, GatewayError> {
        Self::with_navigation(config, NavigationTable::builtin())
    }

    /// State for `config` with a custom navigation table.
    ///
    /// # Errors
    ///
    /// Returns error if the navigation table is invalid or the upstream
    /// client cannot be built.
    pub fn with_navigation(
        config: Config,
        navigation: NavigationTable,
    ) -> Result<Self, GatewayError> {
        let upstream = UpstreamClient::from_config(&config.upstream)
            .map_err(|e| GatewayError::Config(format!("Upstream client: {e}")))?;
        Self::assemble(config, navigation, upstream)
    }

    fn assemble(
        config: Config,
        navigation: NavigationTable,
        upstream: UpstreamClient,
    ) -> Result<Self, GatewayError> {
        navigation
            .validate()
            .map_err(|e| GatewayError::Config(format!("Navigation table: {e}")))?;

        let protected_paths = navigation
            .list_protected_paths()
            .into_iter()
            .map(str::to_string)
            .chain(config.guard.extra_protected_paths.iter().cloned())
            .collect();

        Ok(Self {
            config,
            upstream,
            navigation,
            protected_paths,
        })
    }
}

/// Gateway server.
pub struct Gateway {
    config: Config,
    state: Arc<GatewayState>,
}

/// Builder for constructing a Gateway with its dependencies.
#[derive(Default)]
pub struct GatewayBuilder {
    config: Config,
    navigation: Option<NavigationTable>,
    upstream: Option<UpstreamClient>,
}

impl GatewayBuilder {
    /// Create a new builder with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set gateway configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the builtin navigation table.
    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationTable) -> Self {
        self.navigation = Some(navigation);
        self
    }

    /// Use a prebuilt upstream client instead of one from `config.upstream`.
    #[must_use]
    pub fn with_upstream(mut self, upstream: UpstreamClient) -> Self {
        self.upstream = Some(upstream);
        self
    }

    /// Build the gateway.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration or navigation table is invalid.
    pub fn build(self) -> Result<Gateway, GatewayError> {
        self.config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let navigation = self.navigation.unwrap_or_default();
        let state = match self.upstream {
            Some(upstream) => GatewayState::assemble(self.config.clone(), navigation, upstream)?,
            None => GatewayState::with_navigation(self.config.clone(), navigation)?,
        };

        Ok(Gateway {
            config: self.config,
            state: Arc::new(state),
        })
    }
}

impl Gateway {
    /// Create a gateway with the builtin navigation table.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self, GatewayError> {
        GatewayBuilder::new().with_config(config).build()
    }

    /// Shared state.
    #[must_use]
    pub fn state(&self) -> Arc<GatewayState> {
        Arc::clone(&self.state)
    }

    /// The full application router.
    #[must_use]
    pub fn router(&self) -> Router {
        router(Arc::clone(&self.state))
    }

    /// Run the gateway server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the listener fails.
    pub async fn run(&self) -> Result<(), GatewayError> {
        let gateway = &self.config.gateway;
        let addr: SocketAddr = format!("{}:{}", gateway.bind_address, gateway.port)
            .parse()
            .map_err(|e| GatewayError::Config(format!("Invalid address: {e}")))?;

        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("Gateway listening on http://{}", addr);
        tracing::info!("Forwarding to {}", self.state.upstream.base_url());
        if let Some(dir) = &gateway.static_dir {
            tracing::info!("Serving pages from {}", dir.display());
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| GatewayError::Server(e.to_string()))?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

/// Build the application router over `state`.
///
/// API routes are matched first. Anything else is a page request: it passes
/// the edge guard and is then served from the static directory, or answered
/// 404 when none is configured.
pub fn router(state: Arc<GatewayState>) -> Router {
    let routes = Router::new()
        .route("/health", get(health_handler))
        .merge(handlers::routes());

    let routes = match state.config.gateway.static_dir.clone() {
        Some(dir) => routes.fallback_service(ServeDir::new(dir)),
        None => routes.fallback(not_found_handler),
    };

    let app = routes
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            guard::route_guard,
        ))
        .layer(TraceLayer::new_for_http());

    let app = if state.config.gateway.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    app.with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found_handler() -> Response {
    ErrorBody::new("not found").into_response_with(StatusCode::NOT_FOUND)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
