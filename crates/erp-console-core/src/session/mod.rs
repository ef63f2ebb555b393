//! Bearer token and session context.
//!
//! - `BearerToken`: opaque credential that never prints its value
//! - `SessionContext`: explicit authenticated/anonymous session state

use secrecy::{ExposeSecret, SecretBox};

/// Opaque bearer credential.
///
/// The value is wrapped with `secrecy::SecretBox` so it cannot leak through
/// `Debug` or `Display`. It is forwarded unmodified.
pub struct BearerToken(SecretBox<str>);

impl BearerToken {
    /// Wrap a raw token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretBox::new(token.into().into_boxed_str()))
    }

    /// Extract the token from an `Authorization` header value.
    ///
    /// Only the literal `Bearer ` prefix is accepted. An empty remainder
    /// yields `None`.
    #[must_use]
    pub fn from_authorization(header: &str) -> Option<Self> {
        header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .map(Self::new)
    }

    /// Expose the raw value for sending upstream.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Render as an `Authorization` header value.
    #[must_use]
    pub fn to_header_value(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

impl Clone for BearerToken {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl PartialEq for BearerToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for BearerToken {}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerToken([REDACTED])")
    }
}

impl std::fmt::Display for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Session state of a console client.
///
/// Populated on login, cleared on logout or when the upstream rejects the
/// token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionContext {
    /// No credential held.
    #[default]
    Anonymous,
    /// Credential held together with the upstream user identity.
    Authenticated {
        /// The bearer credential.
        token: BearerToken,
        /// User object as returned by the upstream API.
        user: serde_json::Value,
    },
}

impl SessionContext {
    /// Record a successful login or verification.
    pub fn populate(&mut self, token: BearerToken, user: serde_json::Value) {
        *self = Self::Authenticated { token, user };
    }

    /// Drop the credential.
    pub fn clear(&mut self) {
        *self = Self::Anonymous;
    }

    /// Whether a credential is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The held credential.
    #[must_use]
    pub const fn token(&self) -> Option<&BearerToken> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Anonymous => None,
        }
    }

    /// The upstream user object.
    #[must_use]
    pub const fn user(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Anonymous => None,
        }
    }

    /// A string field of the user object, e.g. `username` or `role`.
    #[must_use]
    pub fn user_field(&self, field: &str) -> Option<&str> {
        self.user()
            .and_then(|u| u.get(field))
            .and_then(serde_json::Value::as_str)
    }
}
