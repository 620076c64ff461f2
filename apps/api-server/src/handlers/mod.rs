//! HTTP handlers and route configuration.

mod annotation_tasks;
mod auth;
mod health;
mod sites;
mod specimen_images;
mod users;


use actix_web::web;

use crate::middleware::error::{listing_query_error, query_error};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let listing_query = || web::QueryConfig::default().error_handler(listing_query_error);

    cfg.service(
        web::scope("/api")
            .app_data(web::QueryConfig::default().error_handler(query_error))
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Session-protected routes
            .route("/auth/session", web::get().to(auth::current_session))
            .service(
                web::scope("/users")
                    .route("/me", web::get().to(users::me))
                    .route("/{id}", web::get().to(users::get_user)),
            )
            .service(
                web::scope("/sites")
                    .route("", web::get().to(sites::list_sites))
                    .route("/{id}", web::get().to(sites::get_site)),
            )
            .service(
                web::resource("/specimen-images")
                    .app_data(listing_query())
                    .route(web::get().to(specimen_images::list_specimen_images)),
            )
            .service(
                web::resource("/annotation-tasks")
                    .app_data(listing_query())
                    .route(web::get().to(annotation_tasks::list_annotation_tasks)),
            ),
    );
}
