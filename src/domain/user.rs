//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// `id == 0` marks a record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Stored exactly as provided; never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether the store has assigned an id to this user
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewUser {
    /// Login name
    #[schema(example = "alice")]
    pub username: String,
    /// Password, stored as provided
    #[schema(example = "s3cret")]
    pub password: String,
    /// Contact email address
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    /// Attach an existing id, producing a record for a full overwrite.
    ///
    /// The timestamps are placeholders; the update path never writes them.
    pub fn into_user(self, id: i64) -> User {
        let now = Utc::now();
        User {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Login name
    #[schema(example = "alice")]
    pub username: String,
    /// Contact email address
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
