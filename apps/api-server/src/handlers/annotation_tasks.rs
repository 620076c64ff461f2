//! Annotation task listing.

use actix_web::{HttpResponse, web};
use specimen_core::PageWindow;
use specimen_core::domain::AnnotationTasksListFilters;
use specimen_shared::ApiResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/annotation-tasks?page=&limit=&title=&status=
pub async fn list_annotation_tasks(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<AnnotationTasksListFilters>,
) -> AppResult<HttpResponse> {
    let filters = query.into_inner();
    let window = PageWindow::resolve(filters.page, filters.limit, &state.listing)?;
    let page = state.annotation_tasks.list(&filters, window).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page)))
}
