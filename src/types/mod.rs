//! Shared request/response shapes used by the HTTP layer.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginatedUsers, PaginationMeta, PaginationParams};
pub use response::{ApiResponse, CountResponse, Created, MessageResponse, RowsAffected, UserEnvelope};
