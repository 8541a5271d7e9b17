//! User repository: the store access layer for the `users` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method maps to exactly one statement against the store.
/// Store failures are returned as `AppError::Database`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new row; the store assigns id and timestamps
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Find user by primary key
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find the lowest-id user with the given username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Overwrite username, password and email of the row with `user.id`.
    /// Returns the number of affected rows.
    async fn update(&self, user: User) -> AppResult<u64>;

    /// Delete the row with the given id. Returns the number of affected rows.
    async fn delete(&self, id: i64) -> AppResult<u64>;

    /// List users ordered by id
    async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<User>>;

    /// Count all users
    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Active model carrying only the writable columns; timestamps stay `NotSet`.
fn writable_columns(username: String, password: String, email: String) -> ActiveModel {
    ActiveModel {
        username: Set(username),
        password: Set(password),
        email: Set(email),
        ..Default::default()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        let model = writable_columns(user.username, user.password, user.email)
            .insert(&self.db)
            .await?;

        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn update(&self, user: User) -> AppResult<u64> {
        let result = UserEntity::update_many()
            .set(writable_columns(user.username, user.password, user.email))
            .filter(user::Column::Id.eq(user.id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }

    async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let total = UserEntity::find().count(&self.db).await?;

        Ok(total)
    }
}
