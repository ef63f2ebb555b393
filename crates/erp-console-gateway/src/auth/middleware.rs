//! Auth gate extractors for axum.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use erp_console_core::BearerToken;

use super::AuthError;
use super::token::resolve_token;
use super::verify::{Verification, verify_token};
use crate::server::GatewayState;

/// Extractor for authenticated requests.
///
/// Resolves the token, verifies it upstream, and only then lets the handler
/// run. Missing tokens and rejected tokens are answered with 401 before the
/// handler is invoked.
#[derive(Debug, Clone)]
pub struct RequireAuth {
    /// The verified token, forwarded unmodified.
    pub token: BearerToken,
    /// User object returned by the upstream verification.
    pub user: serde_json::Value,
}

impl RequireAuth {
    /// A string field of the user object.
    #[must_use]
    pub fn user_field(&self, field: &str) -> Option<&str> {
        self.user.get(field).and_then(serde_json::Value::as_str)
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
    Arc<GatewayState>: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = Arc::<GatewayState>::from_ref(state);
        let BearerAuth(token) = BearerAuth::resolve(parts, &state)?;

        match verify_token(&state.upstream, &token).await {
            Verification::Valid { user } => Ok(Self { token, user }),
            Verification::Invalid { error } => {
                tracing::debug!("Rejected request to {}: {}", parts.uri.path(), error);
                Err(AuthError::InvalidToken(error))
            }
        }
    }
}

/// Extractor that only requires a token to be present.
///
/// Used by the verify route, which is itself the verification.
#[derive(Debug, Clone)]
pub struct BearerAuth(pub BearerToken);

impl BearerAuth {
    fn resolve(parts: &Parts, state: &GatewayState) -> Result<Self, AuthError> {
        resolve_token(&parts.headers, &state.config.auth.cookie_name)
            .map(Self)
            .ok_or(AuthError::MissingToken)
    }
}

impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
    Arc<GatewayState>: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = Arc::<GatewayState>::from_ref(state);
        Self::resolve(parts, &state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_field() {
        let auth = RequireAuth {
            token: BearerToken::new("t"),
            user: json!({"username": "admin", "id": 1}),
        };
        assert_eq!(auth.user_field("username"), Some("admin"));
        assert_eq!(auth.user_field("id"), None);
    }
}
