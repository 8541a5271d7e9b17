//! Domain layer - Core business entities
//!
//! The User entity and its transfer objects, independent of the
//! persistence and HTTP layers.

pub mod user;

pub use user::{NewUser, User, UserResponse};
