//! Token cookie construction.

use axum::http::HeaderValue;

use erp_console_core::BearerToken;
use erp_console_core::config::AuthSection;

/// `Set-Cookie` value carrying `token` for the whole site.
///
/// Returns `None` if the token contains bytes not allowed in a header.
#[must_use]
pub fn token_cookie(auth: &AuthSection, token: &BearerToken) -> Option<HeaderValue> {
    let value = format!(
        "{}={}; Path=/; SameSite=Lax; HttpOnly{}",
        auth.cookie_name,
        token.expose(),
        secure_suffix(auth)
    );
    HeaderValue::from_str(&value).ok()
}

/// `Set-Cookie` value that expires the token cookie.
#[must_use]
pub fn expired_token_cookie(auth: &AuthSection) -> Option<HeaderValue> {
    let value = format!(
        "{}=; Path=/; SameSite=Lax; HttpOnly; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT{}",
        auth.cookie_name,
        secure_suffix(auth)
    );
    HeaderValue::from_str(&value).ok()
}

const fn secure_suffix(auth: &AuthSection) -> &'static str {
    if auth.cookie_secure { "; Secure" } else { "" }
}
