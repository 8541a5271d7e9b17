//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::{AppError, AppResult};

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[param(example = 1)]
    pub page: u64,
    /// Items per page, capped at 100
    #[serde(default = "default_per_page")]
    #[param(example = 20)]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Reject page or page size below 1
    pub fn check(&self) -> AppResult<()> {
        if self.page < 1 {
            return Err(AppError::validation("page must be at least 1"));
        }
        if self.per_page < 1 {
            return Err(AppError::validation("per_page must be at least 1"));
        }
        Ok(())
    }

    /// Row offset of the first item on this page.
    ///
    /// Offsets are bound as signed 64-bit values; anything past `i64::MAX`
    /// is a validation error.
    pub fn offset(&self) -> AppResult<u64> {
        self.page
            .checked_sub(1)
            .and_then(|skipped| skipped.checked_mul(self.limit()))
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| AppError::validation("page out of range"))
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.per_page.min(MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(PaginatedUsers = Paginated<crate::domain::UserResponse>)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            data,
            meta: PaginationMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }
}
