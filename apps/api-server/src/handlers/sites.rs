//! Site handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use specimen_core::DomainError;
use specimen_shared::ApiResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SiteListQuery {
    pub program_id: i64,
}

/// GET /api/sites?program_id=
pub async fn list_sites(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<SiteListQuery>,
) -> AppResult<HttpResponse> {
    let sites = state.sites.list_by_program(query.program_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(sites)))
}

/// GET /api/sites/{id}
pub async fn get_site(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let site = state
        .sites
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Site",
            id: id.to_string(),
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(site)))
}
