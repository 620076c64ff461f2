//! User handlers.

use actix_web::{HttpResponse, web};
use specimen_core::DomainError;
use specimen_shared::ApiResponse;
use uuid::Uuid;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users/me
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(identity.user())))
}

/// GET /api/users/{id} - admins may look up anyone, others only themselves.
pub async fn get_user(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if identity.user().id != id && !identity.user().is_admin() {
        return Err(AppError::Forbidden(
            "Only administrators can view other users".to_string(),
        ));
    }

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "User",
            id: id.to_string(),
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user)))
}
