//! User read handlers.

use actix_web::{web, HttpResponse};
use log::info;

use crate::constants::{MSG_USERS_RETRIEVED, MSG_USER_FOUND};
use crate::errors::ApiError;
use crate::models::{ApiResponse, UserResponse};
use crate::services::UserService;

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_all_users().await?;
    let user_responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();

    info!("Listed {} users", user_responses.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USERS_RETRIEVED, user_responses)))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let user = user_service.find_by_id(Some(user_id)).await?;
    let user_response: UserResponse = user.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_FOUND, user_response)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App};
    use mockall::predicate::eq;

    use crate::models::User;
    use crate::repositories::MockUserRepository;
    use crate::routes::configure_routes;
    use crate::services::UserService;

    fn user(id: i32, name: &str, username: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: format!("{}@email.com", username),
            password: "12345".to_string(),
        }
    }

    fn user_data(repository: MockUserRepository) -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(repository)))
    }

    #[actix_web::test]
    async fn test_get_user_wraps_a_known_user_in_the_envelope() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(user(1, "Fellipe", "felliperey"))));
        let app = test::init_service(
            App::new()
                .app_data(user_data(repository))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users/1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(true, body["success"]);
        assert_eq!(1, body["data"]["id"]);
        assert_eq!("felliperey", body["data"]["username"]);
        assert!(body["data"].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_get_user_with_unknown_id_is_404() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(2))
            .returning(|_| Ok(None));
        let app = test::init_service(
            App::new()
                .app_data(user_data(repository))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users/2").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(StatusCode::NOT_FOUND, resp.status());
    }

    #[actix_web::test]
    async fn test_get_users_lists_every_user() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_all().returning(|| {
            Ok(vec![
                user(1, "Fake User", "fakeuser"),
                user(55, "Fake User2", "fakeuser2"),
            ])
        });
        let app = test::init_service(
            App::new()
                .app_data(user_data(repository))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(2, body["data"].as_array().unwrap().len());
        assert_eq!(1, body["data"][0]["id"]);
        assert_eq!(55, body["data"][1]["id"]);
    }
}
