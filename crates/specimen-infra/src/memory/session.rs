use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use specimen_core::domain::AuthPayload;
use specimen_core::ports::{AuthError, SessionProvider};
use specimen_shared::dto::AuthResponseDto;

use super::mask_email;

/// Sessions handed over by the authentication service, keyed by access token.
///
/// Tokens are only compared for equality; they are never decoded, issued or
/// refreshed here.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, AuthResponseDto>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn register(&self, session: AuthResponseDto) {
        tracing::debug!(
            user_email = %mask_email(&session.user.email),
            "Registering session"
        );
        let key = session.tokens.access_token.clone();
        self.sessions.write().await.insert(key, session);
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionStore {
    async fn resolve(&self, access_token: &str) -> Result<Option<AuthPayload>, AuthError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(access_token).cloned().map(Into::into))
    }
}
