//! Edge route guard.
//!
//! A cheap presence check for page requests: a path under a protected prefix
//! needs a resolvable token, otherwise the visitor is sent to the login page
//! with the original path preserved. Tokens are not verified here; the API
//! routes behind `RequireAuth` do that.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::resolve_token;
use crate::server::GatewayState;

/// Path prefix that is never guarded.
const API_PREFIX: &str = "/api";

/// What the guard does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Pass through unmodified.
    Allow,
    /// Redirect to this login URL.
    Redirect(String),
}

/// Whether `path` falls under any of the protected prefixes.
///
/// Literal string prefix match.
#[must_use]
pub fn is_protected<S: AsRef<str>>(path: &str, protected: &[S]) -> bool {
    protected.iter().any(|p| path.starts_with(p.as_ref()))
}

/// Canonical form of a request path, as the static file server resolves it.
///
/// Percent-decodes once, drops empty and `.` segments, and resolves `..`
/// against the segments before it. Invalid UTF-8 is replaced rather than
/// rejected.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let decoded = urlencoding::decode_binary(raw.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    format!("/{}", segments.join("/"))
}

/// Login URL carrying `path` as the post-login return target.
#[must_use]
pub fn login_redirect(login_path: &str, redirect_param: &str, path: &str) -> String {
    format!(
        "{login_path}?{redirect_param}={}",
        urlencoding::encode(path)
    )
}

/// Decide a page request. `path` must already be normalized.
#[must_use]
pub fn decide(state: &GatewayState, path: &str, has_token: bool) -> GuardDecision {
    if has_token || path.starts_with(API_PREFIX) || !is_protected(path, &state.protected_paths) {
        return GuardDecision::Allow;
    }

    let auth = &state.config.auth;
    GuardDecision::Redirect(login_redirect(&auth.login_path, &auth.redirect_param, path))
}

/// axum middleware applying [`decide`].
pub async fn route_guard(
    State(state): State<Arc<GatewayState>>,
    request: Request,
    next: Next,
) -> Response {
    let path = normalize_path(request.uri().path());
    let has_token = resolve_token(request.headers(), &state.config.auth.cookie_name).is_some();

    match decide(&state, &path, has_token) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!("Redirecting unauthenticated request for {}", path);
            Redirect::temporary(&target).into_response()
        }
    }
}
