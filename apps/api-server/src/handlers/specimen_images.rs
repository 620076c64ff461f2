//! Specimen image listing.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use specimen_core::PageWindow;
use specimen_shared::ApiResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// `?page=&limit=`, both optional.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /api/specimen-images
pub async fn list_specimen_images(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let window = PageWindow::resolve(query.page, query.limit, &state.listing)?;
    let page = state.specimen_images.list(window).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page)))
}
