//! User service - CRUD and listing over the User entity.
//!
//! Each operation issues exactly one repository call. The only local
//! checks are the update id guard and the pagination bounds.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::PaginationParams;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Persist a new user and return it with its store-assigned id
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Get the first user (lowest id) with the given username
    async fn get_user_by_username(&self, username: &str) -> AppResult<User>;

    /// Overwrite the mutable fields of `user.id`, returning affected rows
    async fn update_user(&self, user: User) -> AppResult<u64>;

    /// Delete user by ID, returning affected rows (0 is not an error)
    async fn delete_user(&self, id: i64) -> AppResult<u64>;

    /// List one page of users; `page` is 1-based
    async fn list_users(&self, page: u64, page_size: u64) -> AppResult<Vec<User>>;

    /// Total number of users
    async fn count_users(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let created = self.repo.create(user).await?;
        tracing::debug!(user_id = created.id, "User created");
        Ok(created)
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_not_found()
    }

    async fn update_user(&self, user: User) -> AppResult<u64> {
        if !user.is_persisted() {
            return Err(AppError::validation("user id is required"));
        }

        let id = user.id;
        let rows_affected = self.repo.update(user).await?;
        tracing::debug!(user_id = id, rows_affected, "User updated");
        Ok(rows_affected)
    }

    async fn delete_user(&self, id: i64) -> AppResult<u64> {
        let rows_affected = self.repo.delete(id).await?;
        tracing::debug!(user_id = id, rows_affected, "User deleted");
        Ok(rows_affected)
    }

    async fn list_users(&self, page: u64, page_size: u64) -> AppResult<Vec<User>> {
        let params = PaginationParams::new(page, page_size);
        params.check()?;

        self.repo.list(params.offset()?, params.limit()).await
    }

    async fn count_users(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_PAGE_SIZE;
    use crate::infra::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn create_test_user(id: i64) -> User {
        User {
            id,
            username: format!("user{}", id),
            password: "plain".to_string(),
            email: format!("user{}@example.com", id),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user_returns_assigned_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|new_user| {
                let mut user = create_test_user(17);
                user.username = new_user.username;
                Ok(user)
            });

        let user = service(repo)
            .create_user(NewUser::new("alice", "pw", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(user.id, 17);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_create_user_propagates_store_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().returning(|_| {
            Err(AppError::Database(sea_orm::DbErr::Custom(
                "duplicate entry".to_string(),
            )))
        });

        let result = service(repo)
            .create_user(NewUser::new("alice", "pw", "alice@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .times(1)
            .returning(|id| Ok(Some(create_test_user(id))));

        let user = service(repo).get_user(5).await.unwrap();

        assert_eq!(user.id, 5);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_user(99).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_user_by_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .withf(|username| username == "user3")
            .returning(|_| Ok(Some(create_test_user(3))));

        let user = service(repo).get_user_by_username("user3").await.unwrap();

        assert_eq!(user.id, 3);
    }

    #[tokio::test]
    async fn test_get_user_by_username_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let result = service(repo).get_user_by_username("ghost").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_user_without_id_never_reaches_store() {
        // No expectations: any repository call panics the mock.
        let repo = MockUserRepository::new();

        let result = service(repo).update_user(create_test_user(0)).await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "user id is required"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_user_returns_rows_affected() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(|user| user.id == 8 && user.email == "user8@example.com")
            .times(1)
            .returning(|_| Ok(1));

        let rows = service(repo).update_user(create_test_user(8)).await.unwrap();

        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_zero_rows() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_| Ok(0));

        let rows = service(repo).update_user(create_test_user(404)).await.unwrap();

        assert_eq!(rows, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_an_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().with(eq(1234)).returning(|_| Ok(0));

        let rows = service(repo).delete_user(1234).await.unwrap();

        assert_eq!(rows, 0);
    }

    #[tokio::test]
    async fn test_list_users_computes_offset() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .with(eq(20), eq(10))
            .times(1)
            .returning(|_, _| Ok((21..=25).map(create_test_user).collect()));

        let users = service(repo).list_users(3, 10).await.unwrap();

        assert_eq!(users.len(), 5);
        assert_eq!(users[0].id, 21);
    }

    #[tokio::test]
    async fn test_list_users_caps_page_size() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .with(eq(0), eq(MAX_PAGE_SIZE))
            .returning(|_, _| Ok(vec![]));

        let users = service(repo).list_users(1, 10_000).await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_list_users_rejects_zero_page_and_size() {
        let repo = MockUserRepository::new();
        let service = service(repo);

        assert!(matches!(
            service.list_users(0, 10).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.list_users(1, 0).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_users_rejects_page_beyond_offset_range() {
        // No expectations: the page is refused before any query is built.
        let repo = MockUserRepository::new();

        let result = service(repo).list_users(u64::MAX, 10).await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "page out of range"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_count_users() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().times(1).returning(|| Ok(42));

        assert_eq!(service(repo).count_users().await.unwrap(), 42);
    }
}
