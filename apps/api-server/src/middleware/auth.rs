//! Bearer-session extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use specimen_core::domain::{AuthPayload, User};
use specimen_core::ports::AuthError;

use super::error::AppError;
use crate::state::AppState;

/// The caller's session, resolved from `Authorization: Bearer <token>`.
///
/// Use this in handlers to require an active session:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user().email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    session: AuthPayload,
}

impl Identity {
    pub fn user(&self) -> &User {
        &self.session.user
    }

    pub fn session(&self) -> &AuthPayload {
        &self.session
    }
}

fn bearer_token(req: &HttpRequest) -> Result<String, AuthError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AuthError::InvalidToken("Expected Bearer token".to_string())),
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                AuthError::Backend("AppState not registered with the app".to_string())
            })?;
            let token = token?;

            let session = state
                .sessions
                .resolve(&token)
                .await?
                .ok_or(AuthError::UnknownSession)?;

            if !session.user.is_active {
                tracing::debug!(user_id = %session.user.id, "Rejected inactive account");
                return Err(AuthError::InactiveAccount.into());
            }

            Ok(Identity { session })
        })
    }
}
