//! Authentication for the gateway.
//!
//! This module provides:
//! - Token resolution from the `Authorization` header or the token cookie
//! - Token verification against the upstream API
//! - The `RequireAuth` extractor, the single auth gate for protected routes
//! - Token cookie construction

pub mod cookie;
mod middleware;
mod token;
mod verify;

pub use middleware::{BearerAuth, RequireAuth};
pub use token::{cookie_value, resolve_token};
pub use verify::{VERIFY_PATH, Verification, verify_token};
pub(crate) use verify::VERIFICATION_FAILED;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::ErrorBody;

/// Message returned when no token can be resolved.
pub const NO_TOKEN_MESSAGE: &str = "no token provided";

/// Authentication errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Neither an `Authorization: Bearer` header nor a token cookie.
    #[error("no token provided")]
    MissingToken,

    /// The upstream rejected the token; carries its message.
    #[error("{0}")]
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ErrorBody::new(self.to_string()).into_response_with(StatusCode::UNAUTHORIZED)
    }
}
