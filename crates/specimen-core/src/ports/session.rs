//! Session lookup port.

use async_trait::async_trait;

use crate::domain::AuthPayload;

/// Resolves an access token, as issued by the authentication service, to the
/// session it belongs to. Implementations must treat the token as opaque.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn resolve(&self, access_token: &str) -> Result<Option<AuthPayload>, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Unknown or expired session")]
    UnknownSession,

    #[error("Account is deactivated")]
    InactiveAccount,

    #[error("Session backend failure: {0}")]
    Backend(String),
}
