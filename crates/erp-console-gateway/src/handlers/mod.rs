//! Route handlers.
//!
//! Each handler maps one browser-facing route onto the upstream route of the
//! same shape. Protected handlers take [`RequireAuth`] so the gate runs before
//! the body is even read.

mod auth;
mod crud;
mod navigation;
mod permissions;

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderValue, header::CONTENT_TYPE},
    response::Response,
    routing::{delete, get, post},
};
use serde::de::IgnoredAny;

use crate::auth::RequireAuth;
use crate::error::ProxyError;
use crate::server::GatewayState;
use crate::upstream::{ForwardOptions, UpstreamResponse};

const USERS_PATH: &str = "/api/users";
const ROLES_PATH: &str = "/api/roles";

/// All `/api` routes.
pub(crate) fn routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/verify", get(auth::verify))
        .route("/api/auth/logout", post(auth::logout))
        .merge(crud::routes(USERS_PATH))
        .merge(crud::routes(ROLES_PATH))
        .merge(crud::routes(permissions::PERMISSIONS_PATH))
        .route(
            "/api/permissions/{permission_id}/roles/{role_id}",
            post(permissions::assign_role).delete(permissions::revoke_role),
        )
        .route(
            "/api/role-permissions/{role_id}/permissions",
            post(permissions::grant_to_role),
        )
        .route(
            "/api/role-permissions/{role_id}/permissions/{permission_id}",
            delete(permissions::revoke_from_role),
        )
        .route("/api/navigation", get(navigation::overview))
        .route("/api/navigation/sidebar", get(navigation::sidebar_for_path))
        .route("/api/navigation/sidebars/{id}", get(navigation::sidebar_by_id))
}

/// Decode an inbound JSON body. An empty body becomes `{}`.
pub(crate) fn parse_body(body: &Bytes) -> Result<serde_json::Value, ProxyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Relay an upstream response: same status, same body bytes.
///
/// The body must be JSON (or empty); anything else is a parse failure.
pub(crate) fn relay(response: UpstreamResponse) -> Result<Response, ProxyError> {
    let UpstreamResponse { status, body } = response;

    if body.is_empty() {
        let mut relayed = Response::new(Body::empty());
        *relayed.status_mut() = status;
        return Ok(relayed);
    }

    serde_json::from_slice::<IgnoredAny>(&body)?;

    let mut relayed = Response::new(Body::from(body));
    *relayed.status_mut() = status;
    relayed
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(relayed)
}

/// Forward with the caller's verified token and relay the result.
pub(crate) async fn proxy(
    state: &GatewayState,
    auth: &RequireAuth,
    path: &str,
    options: ForwardOptions,
) -> Result<Response, ProxyError> {
    tracing::debug!(
        "Forwarding {} for {}",
        path,
        auth.user_field("username").unwrap_or("unknown user")
    );
    let response = state.upstream.forward(path, &auth.token, options).await?;
    if !response.is_success() {
        tracing::debug!("Relaying upstream {} for {}", response.status, path);
    }
    relay(response)
}

/// `{base}/{id}` with `id` percent-encoded as a single segment.
pub(crate) fn item_path(base: &str, id: &str) -> String {
    format!("{base}/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(&Bytes::new()).unwrap(), json!({}));
        assert_eq!(parse_body(&Bytes::from_static(b" \n")).unwrap(), json!({}));
        assert_eq!(
            parse_body(&Bytes::from_static(br#"{"email":"a@b.c"}"#)).unwrap(),
            json!({"email": "a@b.c"})
        );
        assert!(matches!(
            parse_body(&Bytes::from_static(b"{not json")),
            Err(ProxyError::Parse(_))
        ));
    }

    #[test]
    fn test_relay_keeps_status_and_bytes() {
        let response = relay(UpstreamResponse {
            status: StatusCode::CREATED,
            body: Bytes::from_static(br#"{"id": 7}"#),
        })
        .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_relay_empty_body() {
        let response = relay(UpstreamResponse {
            status: StatusCode::NO_CONTENT,
            body: Bytes::new(),
        })
        .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_relay_rejects_non_json() {
        let result = relay(UpstreamResponse {
            status: StatusCode::BAD_GATEWAY,
            body: Bytes::from_static(b"<html>bad gateway</html>"),
        });
        assert!(matches!(result, Err(ProxyError::Parse(_))));
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("/api/users", "42"), "/api/users/42");
        assert_eq!(item_path("/api/roles", "a/b"), "/api/roles/a%2Fb");
    }
}
