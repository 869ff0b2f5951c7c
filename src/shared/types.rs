use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, DEFAULT_SORT, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
}

impl Meta {
    /// Meta for one page of a paginated listing
    pub fn paged(total: i64, page: i64, size: i64) -> Self {
        let total_pages = if size > 0 {
            (total + size - 1) / size
        } else {
            0
        };
        Self {
            total,
            page: Some(page),
            size: Some(size),
            total_pages: Some(total_pages),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only an exact `desc` sorts descending; anything else is ascending
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Pagination query parameters for list endpoints.
///
/// Pages are 0-indexed; `sort` is a `field,direction` pair such as `name,asc`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (0-indexed, default: 0)
    #[serde(default)]
    #[param(minimum = 0)]
    pub page: i64,

    /// Number of items per page (default: 20, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub size: i64,

    /// Sort as `field,direction` (default: `name,asc`)
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl PaginationQuery {
    /// Page number, never negative
    pub fn page(&self) -> i64 {
        self.page.max(0)
    }

    /// Calculate SQL OFFSET from page number, saturating for huge pages
    pub fn offset(&self) -> i64 {
        self.page().saturating_mul(self.limit())
    }

    /// Get clamped size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Split `sort` into its property name and direction
    pub fn sort_parts(&self) -> (&str, SortDirection) {
        match self.sort.split_once(',') {
            Some((field, direction)) => (field.trim(), SortDirection::parse(direction.trim())),
            None => (self.sort.trim(), SortDirection::Asc),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}
