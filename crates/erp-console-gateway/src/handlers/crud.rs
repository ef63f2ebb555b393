//! Create/read/update/delete proxies for a flat upstream collection.
//!
//! `base` and `base/{id}` map onto the upstream routes of the same shape.

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    http::Method,
    response::Response,
    routing::get,
};

use super::{item_path, parse_body, proxy};
use crate::auth::RequireAuth;
use crate::error::ProxyError;
use crate::server::GatewayState;
use crate::upstream::ForwardOptions;

type AppState = State<Arc<GatewayState>>;

/// Routes for the collection at `base`.
pub(super) fn routes(base: &'static str) -> Router<Arc<GatewayState>> {
    Router::new()
        .route(
            base,
            get(move |State(state): AppState, auth: RequireAuth| list(state, auth, base)).post(
                move |State(state): AppState, auth: RequireAuth, body: Bytes| {
                    create(state, auth, base, body)
                },
            ),
        )
        .route(
            &format!("{base}/{{id}}"),
            get(
                move |State(state): AppState, auth: RequireAuth, Path(id): Path<String>| {
                    show(state, auth, base, id)
                },
            )
            .put(
                move |State(state): AppState,
                      auth: RequireAuth,
                      Path(id): Path<String>,
                      body: Bytes| update(state, auth, base, id, body),
            )
            .delete(
                move |State(state): AppState, auth: RequireAuth, Path(id): Path<String>| {
                    remove(state, auth, base, id)
                },
            ),
        )
}

async fn list(
    state: Arc<GatewayState>,
    auth: RequireAuth,
    base: &'static str,
) -> Result<Response, ProxyError> {
    proxy(&state, &auth, base, ForwardOptions::get()).await
}

async fn create(
    state: Arc<GatewayState>,
    auth: RequireAuth,
    base: &'static str,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let body = parse_body(&body)?;
    proxy(&state, &auth, base, ForwardOptions::with_body(Method::POST, body)).await
}

async fn show(
    state: Arc<GatewayState>,
    auth: RequireAuth,
    base: &'static str,
    id: String,
) -> Result<Response, ProxyError> {
    proxy(&state, &auth, &item_path(base, &id), ForwardOptions::get()).await
}

async fn update(
    state: Arc<GatewayState>,
    auth: RequireAuth,
    base: &'static str,
    id: String,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let body = parse_body(&body)?;
    proxy(
        &state,
        &auth,
        &item_path(base, &id),
        ForwardOptions::with_body(Method::PUT, body),
    )
    .await
}

async fn remove(
    state: Arc<GatewayState>,
    auth: RequireAuth,
    base: &'static str,
    id: String,
) -> Result<Response, ProxyError> {
    proxy(&state, &auth, &item_path(base, &id), ForwardOptions::delete()).await
}
