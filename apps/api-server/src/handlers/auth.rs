//! Session handlers.

use actix_web::HttpResponse;
use specimen_shared::ApiResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;

/// GET /api/auth/session - the caller's session as handed over by the
/// authentication service.
pub async fn current_session(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(identity.session())))
}
