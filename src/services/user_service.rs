//! User lookup service.
//!
//! Validates lookup arguments and translates storage absence into the
//! not-found error; everything else passes through the repository unchanged.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{ERR_MISSING_USER_ID, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fetch a single user by id.
    ///
    /// A missing id is rejected before the repository is consulted. A lookup
    /// that matches nothing is `ApiError::NotFound`; the record is otherwise
    /// returned as stored.
    pub async fn find_by_id(&self, id: Option<i32>) -> Result<User, ApiError> {
        let id = id.ok_or_else(|| {
            warn!("Rejected user lookup without an id");
            ApiError::BadRequest(ERR_MISSING_USER_ID.to_string())
        })?;

        debug!("Fetching user by id: {}", id);

        let user = self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("User not found with id: {}", id);
            ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
        })?;

        info!("Successfully fetched user: {}", id);
        Ok(user)
    }

    /// Fetch every user, in storage order. Empty storage is an empty list.
    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        debug!("Fetching all users");
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use mockall::predicate::eq;

    fn user(id: i32, name: &str, username: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: format!("{}@email.com", username),
            password: "12345".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_find_by_id_without_id_is_rejected_before_storage() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().times(0);
        let service = UserService::new(Arc::new(repository));

        let err = service.find_by_id(None).await.unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[actix_web::test]
    async fn test_find_by_id_returns_the_matching_user() {
        let mut repository = MockUserRepository::new();
        let fellipe = user(1, "Fellipe", "felliperey");
        repository
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(move |_| Ok(Some(fellipe.clone())));
        let service = UserService::new(Arc::new(repository));

        let response = service.find_by_id(Some(1)).await.unwrap();

        assert_eq!(1, response.id);
        assert_eq!("Fellipe", response.name);
        assert_eq!("felliperey", response.username);
    }

    #[actix_web::test]
    async fn test_find_by_id_with_unknown_id_is_not_found() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(None));
        let service = UserService::new(Arc::new(repository));

        let err = service.find_by_id(Some(2)).await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_get_all_users_with_empty_storage_returns_empty_list() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_all().returning(|| Ok(Vec::new()));
        let service = UserService::new(Arc::new(repository));

        let users = service.get_all_users().await.unwrap();

        assert_eq!(0, users.len());
    }

    #[actix_web::test]
    async fn test_get_all_users_returns_a_single_user() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_all()
            .returning(|| Ok(vec![user(1, "Fake User", "fakeuser")]));
        let service = UserService::new(Arc::new(repository));

        let users = service.get_all_users().await.unwrap();

        assert_eq!(1, users.len());
        assert_eq!(1, users[0].id);
    }

    #[actix_web::test]
    async fn test_get_all_users_preserves_storage_order() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_all().returning(|| {
            Ok(vec![
                user(1, "Fake User", "fakeuser"),
                user(55, "Fake User2", "fakeuser2"),
            ])
        });
        let service = UserService::new(Arc::new(repository));

        let users = service.get_all_users().await.unwrap();

        assert_eq!(2, users.len());
        assert_eq!(1, users[0].id);
        assert_eq!(55, users[1].id);
        assert_eq!("fakeuser", users[0].username);
        assert_eq!("fakeuser2", users[1].username);
    }
}
