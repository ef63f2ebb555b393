//! Login, verify and logout.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use serde::de::IgnoredAny;
use serde_json::{Value, json};

use erp_console_core::{BearerToken, SessionContext};

use super::{parse_body, relay};
use crate::auth::cookie::{expired_token_cookie, token_cookie};
use crate::auth::{BearerAuth, VERIFICATION_FAILED, VERIFY_PATH};
use crate::error::{ErrorBody, ProxyError};
use crate::server::GatewayState;
use crate::upstream::{ForwardOptions, UpstreamResponse};

const LOGIN_PATH: &str = "/api/auth/login";

const CREDENTIALS_REQUIRED: &str = "username and password are required";

/// Forward credentials to the upstream login and relay its answer.
///
/// Only `username` and `password` are sent on. A successful answer that
/// carries a token also sets the token cookie, so page requests pass the
/// edge guard.
pub(super) async fn login(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let body = parse_body(&body)?;
    let (Some(username), Some(password)) = (credential(&body, "username"), credential(&body, "password"))
    else {
        return Ok(ErrorBody::new(CREDENTIALS_REQUIRED).into_response_with(StatusCode::BAD_REQUEST));
    };

    let credentials = json!({ "username": username, "password": password });
    let response = state
        .upstream
        .send_anonymous(LOGIN_PATH, ForwardOptions::with_body(Method::POST, credentials))
        .await?;

    let session = login_session(&response);
    let mut relayed = relay(response)?;

    let cookie = session
        .token()
        .filter(|_| state.config.auth.set_cookie_on_login)
        .and_then(|token| token_cookie(&state.config.auth, token));
    if let Some(cookie) = cookie {
        tracing::debug!("Login succeeded, setting token cookie");
        relayed.headers_mut().append(SET_COOKIE, cookie);
    }

    Ok(relayed)
}

fn credential<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn login_session(response: &UpstreamResponse) -> SessionContext {
    let mut session = SessionContext::default();
    if !response.is_success() {
        return session;
    }

    let Ok(body) = response.json::<Value>() else {
        return session;
    };
    if let Some(token) = body.get("token").and_then(Value::as_str).filter(|t| !t.is_empty()) {
        let user = body.get("user").cloned().unwrap_or(Value::Null);
        session.populate(BearerToken::new(token), user);
    }
    session
}

/// Pass the upstream verification result through.
pub(super) async fn verify(
    State(state): State<Arc<GatewayState>>,
    BearerAuth(token): BearerAuth,
) -> Result<Response, ProxyError> {
    let response = state
        .upstream
        .forward(VERIFY_PATH, &token, ForwardOptions::get())
        .await?;

    if !response.is_success() && response.json::<IgnoredAny>().is_err() {
        return Ok(ErrorBody::new(VERIFICATION_FAILED).into_response_with(response.status));
    }
    relay(response)
}

/// Expire the token cookie.
pub(super) async fn logout(State(state): State<Arc<GatewayState>>) -> Response {
    let mut response = Json(json!({ "message": "logged out" })).into_response();
    if let Some(cookie) = expired_token_cookie(&state.config.auth) {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(status: StatusCode, body: &'static str) -> UpstreamResponse {
        UpstreamResponse {
            status,
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn test_credential() {
        let body = json!({"username": "admin", "password": "", "extra": 1});
        assert_eq!(credential(&body, "username"), Some("admin"));
        assert_eq!(credential(&body, "password"), None);
        assert_eq!(credential(&body, "extra"), None);
        assert_eq!(credential(&body, "missing"), None);
    }

    #[test]
    fn test_login_session_from_token() {
        let session = login_session(&upstream(
            StatusCode::OK,
            r#"{"token":"abc","user":{"username":"admin"}}"#,
        ));
        assert!(session.is_authenticated());
        assert_eq!(session.token().map(BearerToken::expose), Some("abc"));
        assert_eq!(session.user_field("username"), Some("admin"));
    }

    #[test]
    fn test_login_session_stays_anonymous() {
        let rejected = upstream(StatusCode::UNAUTHORIZED, r#"{"token":"abc"}"#);
        assert!(!login_session(&rejected).is_authenticated());

        let no_token = upstream(StatusCode::OK, r#"{"user":{}}"#);
        assert!(!login_session(&no_token).is_authenticated());

        let not_json = upstream(StatusCode::OK, "ok");
        assert!(!login_session(&not_json).is_authenticated());
    }
}
