//! Application services layer.
//!
//! Services depend on repository traits, never on SeaORM directly,
//! so they can be exercised against mocks.

mod user_service;

pub use user_service::{UserManager, UserService};
