//! Repository layer - Data access abstraction
//!
//! Repositories hide SeaORM behind traits so services can be tested
//! against mocks.

pub(crate) mod entities;
mod user_repository;

pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
