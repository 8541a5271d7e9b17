//! Infrastructure layer - External systems integration
//!
//! Owns the database pool, the schema migrations and the
//! repositories that translate domain calls into SQL.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
