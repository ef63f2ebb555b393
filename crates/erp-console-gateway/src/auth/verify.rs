//! Token verification against the upstream API.

use erp_console_core::BearerToken;

use crate::error::INTERNAL_ERROR_MESSAGE;
use crate::upstream::{ForwardOptions, UpstreamClient};

/// Upstream verification endpoint.
pub const VERIFY_PATH: &str = "/api/auth/verify";

/// Fallback when a rejection body is not JSON.
pub(crate) const VERIFICATION_FAILED: &str = "verification failed";
/// Fallback when a rejection body has no `error` field.
const AUTHENTICATION_FAILED: &str = "authentication failed";

/// Outcome of verifying a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Token accepted; carries the upstream user object.
    Valid {
        /// The `user` field of the upstream response.
        user: serde_json::Value,
    },
    /// Token rejected or verification impossible.
    Invalid {
        /// Message for the caller.
        error: String,
    },
}

impl Verification {
    /// Whether the token was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Verify `token` with the upstream.
///
/// Not cached and not retried: every call reaches the upstream.
pub async fn verify_token(upstream: &UpstreamClient, token: &BearerToken) -> Verification {
    let response = match upstream.forward(VERIFY_PATH, token, ForwardOptions::get()).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Token verification failed: {}", e);
            return Verification::Invalid {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            };
        }
    };

    if response.is_success() {
        // any JSON body is accepted; `user` is null when absent
        return match response.json::<serde_json::Value>() {
            Ok(body) => Verification::Valid {
                user: body.get("user").cloned().unwrap_or_default(),
            },
            Err(e) => {
                tracing::warn!("Unreadable verification response: {}", e);
                Verification::Invalid {
                    error: INTERNAL_ERROR_MESSAGE.to_string(),
                }
            }
        };
    }

    tracing::debug!("Upstream rejected token with {}", response.status);

    let error = match response.json::<serde_json::Value>() {
        Ok(body) => body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(AUTHENTICATION_FAILED)
            .to_string(),
        Err(_) => VERIFICATION_FAILED.to_string(),
    };
    Verification::Invalid { error }
}
