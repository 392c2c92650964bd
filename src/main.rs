mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::repositories::{MongoCommentRepository, MongoPostRepository, MongoUserRepository};
use crate::services::{CommentService, PostService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Build repositories and create their indexes
    let user_repository = Arc::new(MongoUserRepository::new(&db));
    let post_repository = Arc::new(MongoPostRepository::new(&db));
    let comment_repository = Arc::new(MongoCommentRepository::new(&db));

    user_repository
        .create_indexes()
        .await
        .expect("Failed to create user indexes");
    post_repository
        .create_indexes()
        .await
        .expect("Failed to create post indexes");
    comment_repository
        .create_indexes()
        .await
        .expect("Failed to create comment indexes");

    // Initialize services
    let user_service = web::Data::new(UserService::new(user_repository));
    let post_service = web::Data::new(PostService::new(post_repository));
    let comment_service = web::Data::new(CommentService::new(comment_repository));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(post_service.clone())
            .app_data(comment_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
