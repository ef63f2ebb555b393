//! Bearer token resolution.

use axum::http::{
    HeaderMap,
    header::{AUTHORIZATION, COOKIE},
};

use erp_console_core::BearerToken;

/// Resolve the caller's token.
///
/// The `Authorization: Bearer <token>` header wins; otherwise the cookie
/// named `cookie_name` is used. The token's shape is not checked.
#[must_use]
pub fn resolve_token(headers: &HeaderMap, cookie_name: &str) -> Option<BearerToken> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(BearerToken::from_authorization);

    from_header.or_else(|| {
        cookie_value(headers, cookie_name)
            .filter(|v| !v.is_empty())
            .map(BearerToken::new)
    })
}

/// Value of the first cookie named `name` across all `Cookie` headers.
#[must_use]
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
