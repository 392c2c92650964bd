//! Route configuration.

use actix_web::web;

use crate::handlers;
use crate::models::HealthResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // User routes
            .service(
                web::scope("/users")
                    .route("", web::get().to(handlers::get_users))
                    .route("/{id}", web::get().to(handlers::get_user))
                    .route("/{id}/posts", web::get().to(handlers::get_user_posts)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(handlers::get_posts))
                    .route("/{id}", web::get().to(handlers::get_post))
                    .route("/{id}/comments", web::get().to(handlers::get_post_comments)),
            )
            // Comment routes
            .service(
                web::scope("/comments")
                    .route("", web::get().to(handlers::get_comments))
                    .route("/{id}", web::get().to(handlers::get_comment)),
            ),
    );
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}
