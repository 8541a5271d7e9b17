//! API middleware.

mod cors;

pub use cors::cors_middleware;
